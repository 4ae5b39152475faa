// ==========================================
// 钢板质量证明书校验 - 内置标准规则表
// ==========================================
// 依据: VL 高强度船体结构钢 Table 9 化学成分限值（含注 2、注 6）
// 依据: 宝钢细晶元素组合与厚度对照表
// 依据: VL 高强度船体结构钢力学性能表
// ==========================================
// 钢级簇仅用于扇出注册，构建完成后不保留
// ==========================================

use crate::rules::chemical::{AlternativeCondition, AlternativeLimitRule, ChemicalLimitRegistry};
use crate::rules::error::ConfigResult;
use crate::rules::limit::LimitDefinition;
use crate::rules::mechanical::{
    ImpactEnergyTable, MechanicalLimitBundle, MechanicalLimitRegistry, ThicknessBand,
};
use crate::rules::plant::{ElementCombination, PlantRuleRegistry};

/// 宝钢规则表主键
pub const BAOSHAN: &str = "BAOSHAN IRON & STEEL CO., LTD.";

// ==========================================
// 化学成分钢级簇
// ==========================================
const CHEM_27S: &[&str] = &["VL A27S", "VL D27S", "VL E27S"];
const CHEM_HIGH: &[&str] = &[
    "VL A32", "VL D32", "VL E32", "VL A36", "VL D36", "VL E36", "VL A40", "VL D40", "VL E40",
];
const CHEM_F: &[&str] = &["VL F27S", "VL F32", "VL F36", "VL F40"];

/// 构建化学成分限值表
pub fn chemical_limits() -> ConfigResult<ChemicalLimitRegistry> {
    let mut registry = ChemicalLimitRegistry::new();
    let all: &[&[&str]] = &[CHEM_27S, CHEM_HIGH, CHEM_F];

    // 必检元素
    registry.register_clusters(&[CHEM_27S, CHEM_HIGH], LimitDefinition::maximum("C", 0.18)?);
    registry.register_clusters(&[CHEM_F], LimitDefinition::maximum("C", 0.16)?);
    registry.register_clusters(all, LimitDefinition::maximum("Si", 0.50)?);
    registry.register_clusters(&[CHEM_27S], LimitDefinition::range("Mn", 0.70, 1.60)?);
    registry.register_clusters(&[CHEM_HIGH, CHEM_F], LimitDefinition::range("Mn", 0.90, 1.60)?);
    registry.register_clusters(&[CHEM_27S, CHEM_HIGH], LimitDefinition::maximum("P", 0.035)?);
    registry.register_clusters(&[CHEM_F], LimitDefinition::maximum("P", 0.025)?);
    registry.register_clusters(&[CHEM_27S, CHEM_HIGH], LimitDefinition::maximum("S", 0.035)?);
    registry.register_clusters(&[CHEM_F], LimitDefinition::maximum("S", 0.025)?);
    registry.register_clusters(all, LimitDefinition::maximum("Cr", 0.20)?);
    registry.register_clusters(all, LimitDefinition::maximum("Mo", 0.08)?);
    registry.register_clusters(&[CHEM_27S, CHEM_HIGH], LimitDefinition::maximum("Ni", 0.40)?);
    registry.register_clusters(&[CHEM_F], LimitDefinition::maximum("Ni", 0.80)?);

    // 非必检元素（细晶元素及残余元素）
    registry.register_clusters(all, LimitDefinition::maximum("Cu", 0.35)?.optional());
    registry.register_clusters(all, LimitDefinition::minimum("Al", 0.020)?.optional());
    registry.register_clusters(all, LimitDefinition::range("Nb", 0.02, 0.05)?.optional());
    registry.register_clusters(all, LimitDefinition::range("V", 0.05, 0.10)?.optional());
    registry.register_clusters(all, LimitDefinition::range("Ti", 0.007, 0.02)?.optional());
    registry.register_clusters(&[CHEM_F], LimitDefinition::maximum("N", 0.009)?.optional());

    // 注 2: 厚度 <= 12.5 mm 时 Mn 下限放宽至 0.70
    registry.register_alternative(AlternativeLimitRule::new(
        CHEM_HIGH,
        AlternativeCondition::ThicknessAtMost { thickness: 12.5 },
        LimitDefinition::range("Mn", 0.70, 1.60)?,
    ));

    // 注 6: 含 Al 时 F 级 N 上限放宽至 0.012
    registry.register_alternative(AlternativeLimitRule::new(
        CHEM_F,
        AlternativeCondition::ElementPresent {
            element: "Al".to_string(),
        },
        LimitDefinition::maximum("N", 0.012)?.optional(),
    ));

    Ok(registry)
}

// ==========================================
// 宝钢钢级簇
// ==========================================
const BAO_A_27S_32: &[&str] = &["VL A27S", "VL A32"];
const BAO_D_27S_32: &[&str] = &["VL D27S", "VL D32"];
const BAO_A36: &[&str] = &["VL A36"];
const BAO_D36: &[&str] = &["VL D36"];
const BAO_E_27S_36: &[&str] = &["VL E27S", "VL E32", "VL E36"];
const BAO_ADE_27S_40: &[&str] = &[
    "VL A27S", "VL A32", "VL A36", "VL D27S", "VL D32", "VL D36", "VL E27S", "VL E32", "VL E36",
    "VL A40", "VL D40", "VL E40",
];
const BAO_ADE_27S_36: &[&str] = &[
    "VL A27S", "VL A32", "VL A36", "VL D27S", "VL D32", "VL D36", "VL E27S", "VL E32", "VL E36",
];
const BAO_ADE_32_36: &[&str] = &["VL A32", "VL D32", "VL E32", "VL A36", "VL D36", "VL E36"];
const BAO_F: &[&str] = &["VL F27S", "VL F32", "VL F36", "VL F40"];

/// 构建钢厂细晶元素组合规则表
pub fn plant_rules() -> ConfigResult<PlantRuleRegistry> {
    let mut registry = PlantRuleRegistry::new();
    let ad: &[&[&str]] = &[BAO_A_27S_32, BAO_D_27S_32, BAO_A36, BAO_D36];
    let ade: &[&[&str]] = &[BAO_A_27S_32, BAO_D_27S_32, BAO_A36, BAO_D36, BAO_E_27S_36];

    // AR: Al+Ti <= 20
    registry.register_clusters(BAOSHAN, ad, "AR", ElementCombination::new(&["Al", "Ti"], 20.0));

    // N: Al+Nb+Ti <= 80, Al+Nb+Ti+V <= 100
    registry.register_clusters(
        BAOSHAN,
        ade,
        "N",
        ElementCombination::new(&["Al", "Nb", "Ti"], 80.0),
    );
    registry.register_clusters(
        BAOSHAN,
        &[BAO_ADE_27S_36],
        "N",
        ElementCombination::new(&["Al", "Nb", "Ti", "V"], 100.0),
    );

    // NR: Al+Nb+Ti <= 40
    registry.register_clusters(
        BAOSHAN,
        ad,
        "NR",
        ElementCombination::new(&["Al", "Nb", "Ti"], 40.0),
    );

    // TM: Al+Ti <= 50 / Al+Nb+Ti <= 68 (F) / 80 / 90
    registry.register_clusters(
        BAOSHAN,
        &[BAO_ADE_32_36],
        "TM",
        ElementCombination::new(&["Al", "Ti"], 50.0),
    );
    registry.register_clusters(
        BAOSHAN,
        &[BAO_F],
        "TM",
        ElementCombination::new(&["Al", "Nb", "Ti"], 68.0),
    );
    registry.register_clusters(
        BAOSHAN,
        ade,
        "TM",
        ElementCombination::new(&["Al", "Nb", "Ti"], 80.0),
    );
    registry.register_clusters(
        BAOSHAN,
        &[BAO_ADE_27S_40],
        "TM",
        ElementCombination::new(&["Al", "Nb", "Ti"], 90.0),
    );

    // 低配组合: N / NR 下 Al+Ti <= 30
    registry.register_clusters(
        BAOSHAN,
        &[BAO_A_27S_32, BAO_D_27S_32],
        "N",
        ElementCombination::new(&["Al", "Ti"], 30.0),
    );
    registry.register_clusters(
        BAOSHAN,
        &[BAO_A_27S_32, BAO_A36],
        "NR",
        ElementCombination::new(&["Al", "Ti"], 30.0),
    );

    registry.register_alias("BAOSHAN", BAOSHAN)?;
    registry.register_alias("BAOSTEEL", BAOSHAN)?;

    Ok(registry)
}

// ==========================================
// 力学性能钢级簇
// ==========================================
const MECH_27S: &[&str] = &["VL A27S", "VL D27S", "VL E27S", "VL F27S"];
const MECH_32: &[&str] = &["VL A32", "VL D32", "VL E32", "VL F32"];
const MECH_36: &[&str] = &["VL A36", "VL D36", "VL E36", "VL F36"];
const MECH_40: &[&str] = &["VL A40", "VL D40", "VL E40", "VL F40"];

/// 钢级韧性等级对应的冲击试验温度 (℃)
fn impact_temperature(grade: &str) -> Option<i32> {
    if grade.starts_with("VL A") {
        Some(0)
    } else if grade.starts_with("VL D") {
        Some(-20)
    } else if grade.starts_with("VL E") {
        Some(-40)
    } else if grade.starts_with("VL F") {
        Some(-60)
    } else {
        None
    }
}

/// 构建力学性能限值表
pub fn mechanical_limits() -> MechanicalLimitRegistry {
    let mut registry = MechanicalLimitRegistry::new();

    // (钢级簇, 屈服下限, 抗拉区间, 延伸率下限, [(纵向, 横向); 3 个厚度档])
    let table: [(&[&str], i32, (i32, i32), i32, [(i32, i32); 3]); 4] = [
        (MECH_27S, 265, (400, 530), 22, [(27, 20), (34, 24), (41, 27)]),
        (MECH_32, 315, (440, 570), 22, [(31, 22), (38, 26), (46, 31)]),
        (MECH_36, 355, (490, 630), 21, [(34, 24), (41, 27), (50, 34)]),
        (MECH_40, 390, (510, 660), 20, [(39, 26), (46, 31), (55, 37)]),
    ];

    for (cluster, yield_min, tensile, elongation_min, impact) in table {
        let impact_energy = ThicknessBand::ALL
            .iter()
            .zip(impact.iter())
            .fold(ImpactEnergyTable::new(), |acc, (band, (l, t))| {
                acc.with_band(*band, *l, *t)
            });

        for grade in cluster {
            // 簇内钢级均以 VL A/D/E/F 开头
            let Some(temperature) = impact_temperature(grade) else {
                continue;
            };
            registry.register(MechanicalLimitBundle::new(
                grade,
                yield_min,
                tensile,
                elongation_min,
                temperature,
                impact_energy.clone(),
            ));
        }
    }

    registry
}
