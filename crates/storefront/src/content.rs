//! Static storefront content.
//!
//! The catalog snapshot, FAQ, feature cards, contact channels and landing
//! stats are built once at startup and shared read-only. Nothing here changes
//! while the process runs.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use levelup_core::{Email, Listing, ListingId, Price};

/// Question and answer shown in the FAQ accordion.
#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Landing page selling point.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A way to reach support.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub title: &'static str,
    pub value: String,
    pub link: String,
}

/// Headline number on the hero section.
#[derive(Debug, Clone, Serialize)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A listing id appears more than once in the seed data.
#[derive(Debug, thiserror::Error)]
#[error("duplicate listing id: {0}")]
pub struct DuplicateListing(pub ListingId);

/// Content store that holds all storefront content in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    listings: Arc<Vec<Listing>>,
    faq: Arc<Vec<FaqEntry>>,
    features: Arc<Vec<Feature>>,
    contacts: Arc<Vec<Contact>>,
    hero_stats: Arc<Vec<HeroStat>>,
}

impl ContentStore {
    /// Build the store from the built-in seed data.
    #[must_use]
    pub fn seeded(support_email: &Email) -> Self {
        Self {
            listings: Arc::new(seed_listings()),
            faq: Arc::new(seed_faq()),
            features: Arc::new(seed_features()),
            contacts: Arc::new(seed_contacts(support_email)),
            hero_stats: Arc::new(seed_hero_stats()),
        }
    }

    /// Build a store around a custom catalog, keeping the default texts.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateListing`] if two listings share an id.
    pub fn with_listings(
        listings: Vec<Listing>,
        support_email: &Email,
    ) -> Result<Self, DuplicateListing> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(&listing.id) {
                return Err(DuplicateListing(listing.id.clone()));
            }
        }
        Ok(Self {
            listings: Arc::new(listings),
            ..Self::seeded(support_email)
        })
    }

    /// The full catalog, in display order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a catalog listing by id.
    #[must_use]
    pub fn get_listing(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| &l.id == id)
    }

    #[must_use]
    pub fn faq(&self) -> &[FaqEntry] {
        &self.faq
    }

    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    #[must_use]
    pub fn hero_stats(&self) -> &[HeroStat] {
        &self.hero_stats
    }
}

// =============================================================================
// Seed Data
// =============================================================================

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=400&h=300&fit=crop")
}

fn listing(
    id: &str,
    title: &str,
    price: u64,
    (level, game_count, hours_played): (u32, u32, u32),
    photo: &str,
    featured: bool,
    tags: &[&str],
) -> Listing {
    Listing {
        id: ListingId::new(id),
        title: title.to_string(),
        price: Price::new(price),
        level,
        game_count,
        hours_played,
        image_url: unsplash(photo),
        featured,
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

fn seed_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Premium CS:GO Account",
            4999,
            (40, 120, 2500),
            "1542751371-adc38448a05e",
            true,
            &["CS:GO", "High Level", "Rare Skins"],
        ),
        listing(
            "2",
            "Dota 2 Pro Account",
            8499,
            (87, 250, 5600),
            "1511512578047-dfb367046420",
            true,
            &["Dota 2", "Pro Level", "Immortals"],
        ),
        listing(
            "3",
            "Starter Account with Popular Games",
            1299,
            (12, 45, 450),
            "1550745165-9bc0b252726f",
            false,
            &["Budget", "Popular Games"],
        ),
        listing(
            "4",
            "AAA Games Collection",
            5999,
            (55, 180, 3200),
            "1552820728-8b83bb6b773f",
            false,
            &["AAA Games", "Complete Library"],
        ),
        listing(
            "5",
            "Indie Games Paradise",
            2499,
            (28, 320, 1800),
            "1587095951604-b9d924a3fda0",
            false,
            &["Indie", "Large Library"],
        ),
        listing(
            "6",
            "Competitive FPS Account",
            6799,
            (65, 95, 4100),
            "1538481199705-c710c4e965fc",
            true,
            &["FPS", "Competitive", "High Rank"],
        ),
    ]
}

fn seed_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Безопасно ли покупать аккаунты?",
            answer: "Да, абсолютно безопасно. Мы гарантируем безопасность каждой сделки. Все \
                аккаунты проходят проверку перед публикацией, а деньги хранятся в защищенном \
                хранилище до завершения сделки.",
        },
        FaqEntry {
            question: "Как быстро я получу аккаунт после покупки?",
            answer: "Доступ к аккаунту предоставляется мгновенно после подтверждения оплаты. \
                Обычно это занимает не более 5 минут. Данные приходят в личный кабинет и на \
                указанную почту.",
        },
        FaqEntry {
            question: "Могу ли я вернуть аккаунт?",
            answer: "Да, вы можете вернуть аккаунт в течение 24 часов после покупки, если он не \
                соответствует описанию или есть проблемы с доступом. После изменения данных \
                аккаунта возврат невозможен.",
        },
        FaqEntry {
            question: "Какие гарантии вы предоставляете?",
            answer: "Мы предоставляем гарантию 30 дней на каждый аккаунт. Если возникнут \
                проблемы с доступом или блокировкой, мы заменим аккаунт или вернем деньги.",
        },
        FaqEntry {
            question: "Как продать свой аккаунт?",
            answer: "Зарегистрируйтесь на платформе, создайте объявление с описанием аккаунта и \
                установите цену. После проверки модератором объявление будет опубликовано в \
                каталоге.",
        },
    ]
}

fn seed_features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Безопасность",
            description: "Гарантия на каждый аккаунт. Защита покупателя и продавца",
        },
        Feature {
            title: "Мгновенно",
            description: "Получите доступ к аккаунту сразу после оплаты",
        },
        Feature {
            title: "Поддержка 24/7",
            description: "Круглосуточная помощь в решении любых вопросов",
        },
    ]
}

fn seed_contacts(support_email: &Email) -> Vec<Contact> {
    vec![
        Contact {
            title: "Email",
            value: support_email.to_string(),
            link: format!("mailto:{support_email}"),
        },
        Contact {
            title: "Telegram",
            value: "@levelupmarket".to_string(),
            link: "https://t.me/levelupmarket".to_string(),
        },
        Contact {
            title: "Телефон",
            value: "+7 (800) 555-35-35".to_string(),
            link: "tel:+78005553535".to_string(),
        },
    ]
}

fn seed_hero_stats() -> Vec<HeroStat> {
    vec![
        HeroStat {
            value: "10K+",
            label: "Сделок",
        },
        HeroStat {
            value: "5K+",
            label: "Пользователей",
        },
        HeroStat {
            value: "24/7",
            label: "Поддержка",
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use levelup_core::{FilterTag, filter_listings};

    use super::*;

    fn store() -> ContentStore {
        ContentStore::seeded(&Email::parse("support@levelup.market").unwrap())
    }

    #[test]
    fn test_seed_ids_unique() {
        let store = store();
        let ids: HashSet<_> = store.listings().iter().map(|l| &l.id).collect();
        assert_eq!(ids.len(), store.listings().len());
    }

    #[test]
    fn test_seed_catalog_bands() {
        let store = store();
        let ids = |tag| -> Vec<String> {
            filter_listings(store.listings(), tag)
                .iter()
                .map(|l| l.id.to_string())
                .collect()
        };
        assert_eq!(ids(FilterTag::All), ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(ids(FilterTag::Featured), ["1", "2", "6"]);
        assert_eq!(ids(FilterTag::Budget), ["3", "5"]);
        assert_eq!(ids(FilterTag::Premium), ["2", "4", "6"]);
    }

    #[test]
    fn test_get_listing() {
        let store = store();
        let listing = store.get_listing(&ListingId::new("3")).unwrap();
        assert_eq!(listing.price, Price::new(1299));
        assert!(store.get_listing(&ListingId::new("99")).is_none());
    }

    #[test]
    fn test_with_listings_rejects_duplicates() {
        let email = Email::parse("support@levelup.market").unwrap();
        let dup = seed_listings().into_iter().take(1).cycle().take(2).collect();
        let err = ContentStore::with_listings(dup, &email).unwrap_err();
        assert_eq!(err.0, ListingId::new("1"));
    }

    #[test]
    fn test_contacts_use_support_email() {
        let store = store();
        let email = store.contacts().first().unwrap();
        assert_eq!(email.value, "support@levelup.market");
        assert_eq!(email.link, "mailto:support@levelup.market");
    }

    #[test]
    fn test_static_sections_populated() {
        let store = store();
        assert_eq!(store.faq().len(), 5);
        assert_eq!(store.features().len(), 3);
        assert_eq!(store.hero_stats().len(), 3);
    }
}
