use serde::{Deserialize, Serialize};

/// Successful `/analyze` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackResult {
    pub feedback: String,
    pub word_count: usize,
    pub success: bool,
}

impl FeedbackResult {
    pub fn new(feedback: String, word_count: usize) -> Self {
        Self {
            feedback,
            word_count,
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_result_serializes_with_success_flag() {
        let result = FeedbackResult::new("Good structure.".to_string(), 4);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "feedback": "Good structure.", "word_count": 4, "success": true })
        );
    }
}
