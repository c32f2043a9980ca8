//! Landing page copy.

use crate::scroll::{Anchor, ScrollTarget};

pub const BRAND: &str = "Hear Me Yap";
pub const NAV_ITEMS: &[&str] = &["About", "Dashboard"];

pub const HERO_TITLE: &str = "Hear People Yap";
pub const HERO_SUBTITLE: &str = "Where thoughts become stories and ideas find their audience";

pub const DEFAULT_PHRASES: &[&str] = &[
    "Read people's thoughts and stories here...",
    "Or you are free to share yours...",
    "Maybe no one will read this...",
    "But yeah, it's cool.",
];

pub const START_YAPPING: &str = "Start Yapping";
pub const EXPLORE_CONTENT: &str = "Explore Content";
pub const GET_STARTED: &str = "Get Started Now";
pub const SCROLL_DOWN: &str = "Scroll Down";

pub const STEPS_TITLE: &str = "How It Works";
pub const STEPS_SUBTITLE: &str =
    "Getting started with Yap is simple. Follow these steps to begin your journey.";

/// "Start Yapping" lands a little above the section.
pub const START_TARGET: ScrollTarget = ScrollTarget::new(Anchor::HowItWorks, -2);
/// The "Scroll Down" indicator lands exactly on it.
pub const SCROLL_DOWN_TARGET: ScrollTarget = ScrollTarget::new(Anchor::HowItWorks, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "📝",
        title: "Share Your Thoughts",
        description: "Express yourself through text and connect with others",
    },
    Feature {
        icon: "👥",
        title: "Follow Creators",
        description: "Stay updated with your favorite writers and thinkers",
    },
    Feature {
        icon: "🔍",
        title: "Discover Stories",
        description: "Find content that resonates with your interests",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        icon: "👤",
        title: "Create Your Account",
        description: "Sign up in seconds and customize your profile to reflect your personality.",
    },
    Step {
        number: "02",
        icon: "🔎",
        title: "Discover Content",
        description: "Browse through trending yaps and find creators that match your interests.",
    },
    Step {
        number: "03",
        icon: "💜",
        title: "Follow Favorites",
        description: "Subscribe to creators you enjoy to build a personalized feed of content.",
    },
    Step {
        number: "04",
        icon: "✏️",
        title: "Create Your Yaps",
        description: "Share your thoughts, stories, or expertise with the world.",
    },
];
