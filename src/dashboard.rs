//! Dashboard view model
//!
//! The growth dashboard is rendered client-side; this module only decides
//! what it shows: the tool cards, the session-aware header and the saved
//! hashtags section links. Session state comes from a [`SessionProvider`],
//! navigation is expressed as target paths.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Header set by the fronting auth proxy with the user's first name
pub const SESSION_USER_HEADER: &str = "x-session-user";

/// Header set by the fronting auth proxy with the user's role
pub const SESSION_ROLE_HEADER: &str = "x-session-role";

pub const ADMIN_ROLE: &str = "ADMIN";

/// Where the client navigates after signing out
pub const LOGOUT_REDIRECT: &str = "/auth/login";

/// Read-only view of the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub first_name: Option<String>,
    pub role: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Source of the current user for a request
pub trait SessionProvider: Send + Sync {
    fn current_user(&self, headers: &HeaderMap) -> Option<SessionUser>;
}

/// Session forwarded by an auth proxy through identity headers.
///
/// No `x-session-user` header means no session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardedSession;

impl SessionProvider for ForwardedSession {
    fn current_user(&self, headers: &HeaderMap) -> Option<SessionUser> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .map(str::to_string)
        };

        let first_name = header(SESSION_USER_HEADER)?;
        Some(SessionUser {
            first_name: Some(first_name).filter(|n| !n.is_empty()),
            role: header(SESSION_ROLE_HEADER).filter(|r| !r.is_empty()),
        })
    }
}

/// Navigation card for one growth tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
}

const TOOLS: &[Tool] = &[
    Tool {
        label: "Search Hashtags",
        icon: "hash",
        href: "/hashtag-search",
        description: "Find trending hashtags for your niche",
        stats: "450M+ hashtags",
    },
    Tool {
        label: "Find Users",
        icon: "users",
        href: "/users",
        description: "Discover potential followers and collaborators",
        stats: "100K+ profiles",
    },
    Tool {
        label: "DM Automation",
        icon: "message-circle",
        href: "/automation/dm",
        description: "Automate Instagram DMs with smart replies",
        stats: "AI-powered",
    },
    Tool {
        label: "Smart Engagement",
        icon: "zap",
        href: "/automation/engagement",
        description: "Auto-engage with your target audience",
        stats: "24/7 Active",
    },
    Tool {
        label: "Hashtag Generator",
        icon: "bot",
        href: "/hashtag-generator",
        description: "Generate AI-powered hashtags for your posts",
        stats: "AI-powered",
    },
    Tool {
        label: "Content Scheduler",
        icon: "clock",
        href: "/automation/scheduler",
        description: "Schedule and auto-publish content",
        stats: "Smart timing",
    },
    Tool {
        label: "Growth Targeting",
        icon: "target",
        href: "/automation/targeting",
        description: "Target and engage specific audiences",
        stats: "Precision tools",
    },
    Tool {
        label: "Analytics",
        icon: "bar-chart-2",
        href: "/analytics",
        description: "Track your growth and engagement",
        stats: "Real-time data",
    },
    Tool {
        label: "Settings",
        icon: "settings",
        href: "/settings",
        description: "Customize your experience",
        stats: "Full control",
    },
];

/// The static tool catalogue, in display order
pub fn tools() -> &'static [Tool] {
    TOOLS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardHeader {
    pub title: String,
    pub subtitle: &'static str,
    /// Logout target, present only with a session
    pub logout: Option<&'static str>,
}

/// Saved hashtags section; the list itself is loaded lazily by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedHashtagsSection {
    pub title: &'static str,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub header: DashboardHeader,
    pub tools: &'static [Tool],
    pub saved_hashtags: SavedHashtagsSection,
}

impl DashboardView {
    pub fn build(session: Option<&SessionUser>) -> Self {
        let header = match session {
            Some(user) => DashboardHeader {
                title: format!("Welcome, {}", user.first_name.as_deref().unwrap_or("")),
                subtitle: if user.is_admin() {
                    "Admin Access"
                } else {
                    "Manage your Instagram growth"
                },
                logout: Some(LOGOUT_REDIRECT),
            },
            None => DashboardHeader {
                title: "Dashboard".to_string(),
                subtitle: "Manage your Instagram growth",
                logout: None,
            },
        };

        Self {
            header,
            tools: tools(),
            saved_hashtags: SavedHashtagsSection {
                title: "Saved Hashtags",
                links: vec![
                    NavLink {
                        label: "Search More",
                        href: "/hashtag-search",
                    },
                    NavLink {
                        label: "View All",
                        href: "/hashtags",
                    },
                ],
            },
        }
    }
}
