use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PipeErr {
    #[error("[Source] Sequence has been modified during iteration: expected `{expected}` elements, found `{found}`")]
    ConcurrencyViolation { expected: usize, found: usize },

    #[error("[View] Attempting to iterate a single-use view more than once")]
    InvalidUse,
}

impl PipeErr {
    /// 错误码，按照声明顺序从1开始编号，供宿主以数值形式上报。
    pub fn code(&self) -> u8 {
        match self {
            PipeErr::ConcurrencyViolation { .. } => 1,
            PipeErr::InvalidUse => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code() {
        assert_eq!(PipeErr::ConcurrencyViolation { expected: 1, found: 2 }.code(), 1);
        assert_eq!(PipeErr::InvalidUse.code(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PipeErr::ConcurrencyViolation { expected: 3, found: 4 }.to_string(),
            "[Source] Sequence has been modified during iteration: expected `3` elements, found `4`"
        );
        assert_eq!(PipeErr::InvalidUse.to_string(), "[View] Attempting to iterate a single-use view more than once");
    }
}
