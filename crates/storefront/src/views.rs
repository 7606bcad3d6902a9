//! Terminal views.
//!
//! Each screen is an Askama text template. View structs borrow from the
//! session state and only carry what the template prints; anything that
//! needs formatting logic is prepared here so templates stay declarative.

use askama::Template;
use chrono::Local;

use levelup_core::{ChatMessage, FilterTag, Listing, Sender, Transcript};

use crate::content::{Contact, FaqEntry, Feature, HeroStat};
use crate::filters;
use crate::models::{Notice, UserProfile};
use crate::state::{AppState, Dashboard};

/// One tab of the catalog filter bar.
pub struct TagView {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl TagView {
    fn tabs(current: FilterTag) -> Vec<Self> {
        FilterTag::ALL
            .iter()
            .map(|tag| Self {
                key: tag.key(),
                label: tag.label(),
                active: *tag == current,
            })
            .collect()
    }
}

/// Landing page: hero, session line and selling points.
#[derive(Template)]
#[template(path = "home.txt")]
pub struct HomeTemplate<'a> {
    pub user: Option<&'a UserProfile>,
    pub hero_stats: &'a [HeroStat],
    pub features: &'a [Feature],
}

impl<'a> HomeTemplate<'a> {
    #[must_use]
    pub fn new(state: &'a AppState) -> Self {
        Self {
            user: state.user(),
            hero_stats: state.content().hero_stats(),
            features: state.content().features(),
        }
    }
}

/// Catalog grid with its filter bar.
#[derive(Template)]
#[template(path = "catalog.txt")]
pub struct CatalogTemplate<'a> {
    pub tabs: Vec<TagView>,
    pub listings: Vec<&'a Listing>,
}

impl<'a> CatalogTemplate<'a> {
    #[must_use]
    pub fn new(filter: FilterTag, listings: Vec<&'a Listing>) -> Self {
        Self {
            tabs: TagView::tabs(filter),
            listings,
        }
    }

    /// The catalog as currently filtered in `state`.
    #[must_use]
    pub fn for_state(state: &'a AppState) -> Self {
        Self::new(state.filter(), state.visible_listings())
    }
}

/// Detail card for a single listing.
#[derive(Template)]
#[template(path = "listing.txt")]
pub struct ListingTemplate<'a> {
    pub listing: &'a Listing,
}

/// Dashboard with purchase, sales and wallet tabs.
#[derive(Template)]
#[template(path = "dashboard.txt")]
pub struct DashboardTemplate<'a> {
    pub dashboard: Dashboard<'a>,
    /// Avatar URL, or initials when no avatar is set.
    pub avatar: String,
}

impl<'a> DashboardTemplate<'a> {
    #[must_use]
    pub fn new(dashboard: Dashboard<'a>) -> Self {
        let avatar = dashboard
            .profile
            .avatar
            .clone()
            .unwrap_or_else(|| dashboard.profile.initials());
        Self { dashboard, avatar }
    }
}

#[derive(Template)]
#[template(path = "faq.txt")]
pub struct FaqTemplate<'a> {
    pub entries: &'a [FaqEntry],
}

#[derive(Template)]
#[template(path = "contacts.txt")]
pub struct ContactsTemplate<'a> {
    pub contacts: &'a [Contact],
}

/// One rendered chat line.
pub struct MessageView<'a> {
    /// Local wall-clock time, `HH:MM`.
    pub time: String,
    pub author: &'static str,
    pub text: &'a str,
}

impl<'a> From<&'a ChatMessage> for MessageView<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        Self {
            time: message
                .created_at
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            author: match message.sender {
                Sender::User => "Вы",
                Sender::Assistant => "AI Помощник",
            },
            text: &message.text,
        }
    }
}

/// Chat widget contents.
#[derive(Template)]
#[template(path = "transcript.txt")]
pub struct TranscriptTemplate<'a> {
    pub messages: Vec<MessageView<'a>>,
    pub typing: bool,
}

impl<'a> TranscriptTemplate<'a> {
    #[must_use]
    pub fn new(transcript: &'a Transcript, typing: bool) -> Self {
        Self {
            messages: transcript.iter().map(MessageView::from).collect(),
            typing,
        }
    }
}

/// A single chat line, used when a reply arrives in the background.
#[derive(Template)]
#[template(path = "message.txt")]
pub struct MessageTemplate<'a> {
    pub message: MessageView<'a>,
}

impl<'a> MessageTemplate<'a> {
    #[must_use]
    pub fn new(message: &'a ChatMessage) -> Self {
        Self {
            message: MessageView::from(message),
        }
    }
}

#[derive(Template)]
#[template(path = "notice.txt")]
pub struct NoticeTemplate<'a> {
    pub notice: &'a Notice,
}

/// Command reference.
#[derive(Template)]
#[template(path = "help.txt")]
pub struct HelpTemplate;
