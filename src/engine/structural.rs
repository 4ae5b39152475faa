// ==========================================
// 钢板质量证明书校验 - 钢厂细晶元素结构校验
// ==========================================
// 依据: 钢厂细晶元素组合与厚度对照表
// 红线: 组合选择规则必须确定，平手按注册顺序取先者
// ==========================================
// 职责: 选定适用的细晶元素组合 → 厚度校验 → 组合元素化学成分校验
// 输入: 钢厂 + 钢级 + 交货状态 + 厚度 + 化学成分
// 输出: 厚度结果 + 组合内各元素结果
// ==========================================

mod core;


pub use self::core::{select_combination, StructuralRuleResolver};
