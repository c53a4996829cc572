//! ActionKind - Classification of a webhook action

/// Embed color for created items
pub const CREATE_COLOR: u32 = 0x52C41A;
/// Embed color for updated items
pub const UPDATE_COLOR: u32 = 0xFADB14;
/// Embed color for deleted items
pub const DELETE_COLOR: u32 = 0xF5222D;

/// Kind of mutation an action describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Update,
    Delete,
    /// Any other tag; never rendered
    Unsupported,
}

impl ActionKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "create" => ActionKind::Create,
            "update" => ActionKind::Update,
            "delete" => ActionKind::Delete,
            _ => ActionKind::Unsupported,
        }
    }

    /// Embed color, `None` for unsupported kinds
    pub fn color(&self) -> Option<u32> {
        match self {
            ActionKind::Create => Some(CREATE_COLOR),
            ActionKind::Update => Some(UPDATE_COLOR),
            ActionKind::Delete => Some(DELETE_COLOR),
            ActionKind::Unsupported => None,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Create => write!(f, "create"),
            ActionKind::Update => write!(f, "update"),
            ActionKind::Delete => write!(f, "delete"),
            ActionKind::Unsupported => write!(f, "unsupported"),
        }
    }
}
