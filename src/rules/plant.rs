// ==========================================
// 钢板质量证明书校验 - 钢厂细晶元素组合规则表
// ==========================================
// 结构: 钢厂 → (钢级, 交货状态) → 候选细晶元素组合（注册顺序）
// 每个组合带最大厚度限制
// 覆盖策略: 同一元素集重复注册时后注册者生效，保留原位置
// ==========================================

use crate::domain::certificate::Composition;
use crate::rules::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// ElementCombination - 细晶元素组合
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCombination {
    elements: Vec<String>,
    max_thickness: f64, // mm
}

impl ElementCombination {
    pub fn new(elements: &[&str], max_thickness: f64) -> Self {
        Self {
            elements: elements.iter().map(|e| e.to_string()).collect(),
            max_thickness,
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn max_thickness(&self) -> f64 {
        self.max_thickness
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// 组合内所有元素是否都出现在证书化学成分中
    pub fn is_present_in(&self, composition: &Composition) -> bool {
        self.elements.iter().all(|e| composition.contains_key(e))
    }

    /// 元素集相同（与顺序无关）
    fn same_elements(&self, other: &ElementCombination) -> bool {
        self.elements.len() == other.elements.len()
            && self.elements.iter().all(|e| other.elements.contains(e))
    }

    /// 组合标签，如 "Al+Nb+Ti"
    pub fn label(&self) -> String {
        self.elements.join("+")
    }
}

type ConditionKey = (String, String); // (钢级, 交货状态)

// ==========================================
// PlantRuleRegistry - 钢厂规则表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PlantRuleRegistry {
    plants: HashMap<String, HashMap<ConditionKey, Vec<ElementCombination>>>,
    aliases: HashMap<String, String>,
}

impl PlantRuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为钢厂的一组钢级、一个交货状态注册候选组合
    pub fn register(
        &mut self,
        plant: &str,
        grades: &[&str],
        delivery_condition: &str,
        combination: ElementCombination,
    ) {
        let table = self.plants.entry(plant.to_string()).or_default();
        for grade in grades {
            let candidates = table
                .entry((grade.to_string(), delivery_condition.to_string()))
                .or_default();
            match candidates
                .iter_mut()
                .find(|existing| existing.same_elements(&combination))
            {
                Some(existing) => {
                    debug!(
                        plant = %plant,
                        grade = %grade,
                        delivery_condition = %delivery_condition,
                        combination = %combination.label(),
                        "重复注册细晶元素组合，后注册者生效"
                    );
                    *existing = combination.clone();
                }
                None => candidates.push(combination.clone()),
            }
        }
    }

    /// 按钢级簇批量注册
    pub fn register_clusters(
        &mut self,
        plant: &str,
        clusters: &[&[&str]],
        delivery_condition: &str,
        combination: ElementCombination,
    ) {
        for cluster in clusters {
            self.register(plant, cluster, delivery_condition, combination.clone());
        }
    }

    /// 注册钢厂别名；目标钢厂必须已注册
    pub fn register_alias(&mut self, alias: &str, plant: &str) -> ConfigResult<()> {
        if !self.plants.contains_key(plant) {
            return Err(ConfigError::InvalidAlias {
                alias: alias.to_string(),
                plant: plant.to_string(),
            });
        }
        self.aliases.insert(alias.to_string(), plant.to_string());
        Ok(())
    }

    /// 解析证书上的钢厂名称为规则表主键（先精确匹配，再查别名）
    pub fn resolve_plant<'a>(&'a self, name: &str) -> ConfigResult<&'a str> {
        let name = name.trim();
        if let Some((key, _)) = self.plants.get_key_value(name) {
            return Ok(key.as_str());
        }
        self.aliases
            .get(name)
            .map(|canonical| canonical.as_str())
            .ok_or_else(|| ConfigError::UnknownPlant(name.to_string()))
    }

    pub fn plants(&self) -> impl Iterator<Item = &str> {
        self.plants.keys().map(|p| p.as_str())
    }

    /// 查询候选组合（注册顺序）
    pub fn combinations(
        &self,
        plant: &str,
        grade: &str,
        delivery_condition: &str,
    ) -> ConfigResult<&[ElementCombination]> {
        let canonical = self.resolve_plant(plant)?;
        let no_combination = || ConfigError::NoCombination {
            plant: canonical.to_string(),
            grade: grade.to_string(),
            delivery_condition: delivery_condition.to_string(),
        };

        let table = self.plants.get(canonical).ok_or_else(no_combination)?;
        let candidates = table
            .get(&(grade.to_string(), delivery_condition.trim().to_string()))
            .ok_or_else(no_combination)?;

        if candidates.is_empty() {
            return Err(no_combination());
        }
        Ok(candidates.as_slice())
    }
}
