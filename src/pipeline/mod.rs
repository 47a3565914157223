pub mod stage1_engagement;
pub mod stage2_traits;
pub mod stage3_report;
