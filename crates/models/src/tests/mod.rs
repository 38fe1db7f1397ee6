

/// Exam join mapping
pub mod exam_tests;
