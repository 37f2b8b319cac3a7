//! Pure mappings from node type and status to their display treatment.
//!
//! Each enumeration value selects a `const` descriptor through an exhaustive `match`,
//! so adding a variant without a descriptor is a build error rather than a silent gap.

use crate::node::{NodeStatus, NodeType};

/// Success rates at or above this percentage are shown in the "good" tone.
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;

/// Which glyph family to draw icons with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Unicode,
    Ascii,
}

/// Every icon the logic tree can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Play,
    Warning,
    Check,
    Fork,
    CheckCircle,
    Pause,
    XCircle,
    Chevron,
}

impl IconKind {
    pub const fn glyph(self, glyphs: GlyphSet) -> &'static str {
        match glyphs {
            GlyphSet::Unicode => match self {
                IconKind::Play => "\u{25B6}",
                IconKind::Warning => "\u{26A0}",
                IconKind::Check => "\u{2713}",
                IconKind::Fork => "\u{2442}",
                IconKind::CheckCircle => "\u{2714}",
                IconKind::Pause => "\u{23F8}",
                IconKind::XCircle => "\u{2716}",
                IconKind::Chevron => "\u{203A}",
            },
            GlyphSet::Ascii => match self {
                IconKind::Play => ">",
                IconKind::Warning => "!",
                IconKind::Check => "v",
                IconKind::Fork => "Y",
                IconKind::CheckCircle => "+",
                IconKind::Pause => "=",
                IconKind::XCircle => "x",
                IconKind::Chevron => ">",
            },
        }
    }
}

/// Colour treatment of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Positive,
    Muted,
    Danger,
}

impl BadgeTone {
    pub const fn class_name(self) -> &'static str {
        match self {
            BadgeTone::Positive => "success",
            BadgeTone::Muted => "muted",
            BadgeTone::Danger => "danger",
        }
    }
}

/// Colour treatment of a success-rate figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateTone {
    Good,
    Bad,
}

impl RateTone {
    pub const fn class_name(self) -> &'static str {
        match self {
            RateTone::Good => "success",
            RateTone::Bad => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub badge: BadgeTone,
    pub icon: IconKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub icon: IconKind,
}

const ACTIVE: StatusDescriptor = StatusDescriptor {
    badge: BadgeTone::Positive,
    icon: IconKind::CheckCircle,
};
const INACTIVE: StatusDescriptor = StatusDescriptor {
    badge: BadgeTone::Muted,
    icon: IconKind::Pause,
};
const ERROR: StatusDescriptor = StatusDescriptor {
    badge: BadgeTone::Danger,
    icon: IconKind::XCircle,
};

const TRIGGER: TypeDescriptor = TypeDescriptor {
    icon: IconKind::Play,
};
const CONDITION: TypeDescriptor = TypeDescriptor {
    icon: IconKind::Warning,
};
const ACTION: TypeDescriptor = TypeDescriptor {
    icon: IconKind::Check,
};
const BRANCH: TypeDescriptor = TypeDescriptor {
    icon: IconKind::Fork,
};

pub fn classify_status(status: NodeStatus) -> &'static StatusDescriptor {
    match status {
        NodeStatus::Active => &ACTIVE,
        NodeStatus::Inactive => &INACTIVE,
        NodeStatus::Error => &ERROR,
    }
}

pub fn classify_type(node_type: NodeType) -> &'static TypeDescriptor {
    match node_type {
        NodeType::Trigger => &TRIGGER,
        NodeType::Condition => &CONDITION,
        NodeType::Action => &ACTION,
        NodeType::Branch => &BRANCH,
    }
}

/// The boundary value itself counts as good.
pub fn classify_success_rate(rate: f64) -> RateTone {
    if rate >= SUCCESS_RATE_THRESHOLD {
        RateTone::Good
    } else {
        RateTone::Bad
    }
}
