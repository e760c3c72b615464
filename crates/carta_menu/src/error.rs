//! Menu error types

use thiserror::Error;

/// Broad category of a [`MenuError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter failed a type, range or shape check
    Validation,
    /// Leftover style keys nobody consumed
    UnrecognizedParameter,
    /// The widget/menu graph would become inconsistent
    Structural,
    /// Parameters that are individually valid but conflict
    State,
}

/// Errors raised while building and registering widgets
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    /// A style or kind-specific parameter is invalid
    #[error("invalid parameter `{param}`: {reason}")]
    Validation { param: String, reason: String },

    /// An optional parameter was not recognized by the widget kind
    #[error("widget optional parameter `{0}` is not valid")]
    UnrecognizedParameter(String),

    /// A widget ID is already used in the menu
    #[error("widget ID {0:?} is duplicated")]
    DuplicateId(String),

    /// The widget is already bound to a menu
    #[error("widget {0:?} is already bound to a menu")]
    AlreadyBound(String),

    /// The widget is bound to a different menu than the one appending it
    #[error("widget {0:?} is bound to another menu")]
    ForeignWidget(String),

    /// Linking the submenu would make the menu graph cyclic
    #[error(
        "menu {0:?} is already in the submenu structure; use a back action to return to previous menus"
    )]
    RecursiveSubmenu(String),

    /// The menu does not exist in the tree
    #[error("unknown menu")]
    UnknownMenu,

    /// Two widgets in a menu and its submenus report data under one ID
    #[error("collision between widget data ID {id:?} at depth {depth}")]
    InputCollision { id: String, depth: usize },

    /// Parameters conflict with each other
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl MenuError {
    pub(crate) fn validation(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// The error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::UnrecognizedParameter(_) => ErrorKind::UnrecognizedParameter,
            Self::DuplicateId(_)
            | Self::AlreadyBound(_)
            | Self::ForeignWidget(_)
            | Self::RecursiveSubmenu(_)
            | Self::UnknownMenu
            | Self::InputCollision { .. } => ErrorKind::Structural,
            Self::InvalidState(_) => ErrorKind::State,
        }
    }

    /// Name of the offending parameter, for validation and unrecognized-key errors
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Validation { param, .. } => Some(param),
            Self::UnrecognizedParameter(key) => Some(key),
            _ => None,
        }
    }
}

/// Result type for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;
