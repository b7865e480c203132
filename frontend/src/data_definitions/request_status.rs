//! Status of a user-triggered request, shown next to the control that sent it.

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn message(&self) -> Option<(&str, &'static str)> {
        match self {
            Self::Idle => None,
            Self::Pending => Some(("Working...", "#6B7280")),
            Self::Succeeded(msg) => Some((msg.as_str(), "#15803D")),
            Self::Failed(msg) => Some((msg.as_str(), "#B91C1C")),
        }
    }
}
