//! Keyword rules for the support chat assistant.
//!
//! Replies are picked from a fixed, ordered rule table. Input is lower-cased
//! and each rule's trigger substrings are checked in table order; the first
//! rule with any trigger present wins. Matching is plain substring
//! containment, so `безопас` also fires on `безопасно` and `небезопасно`.

use serde::{Deserialize, Serialize};

/// First assistant message of every new conversation.
pub const WELCOME_MESSAGE: &str = "Здравствуйте! Я ваш виртуальный помощник. Чем могу помочь?";

/// Reply used when no rule matches, including for empty input.
pub const FALLBACK_REPLY: &str = "Спасибо за вопрос! Для более детальной консультации вы можете \
    связаться с нашей поддержкой через раздел \"Контакты\" или написать на \
    support@levelup-market.ru";

/// What a matched rule is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Help,
    Balance,
    Purchase,
    Selling,
    Safety,
    Greeting,
    Thanks,
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub topic: Topic,
    /// Lower-case substrings; any one of them activates the rule.
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

impl ResponseRule {
    /// Whether any trigger occurs in already lower-cased `text`.
    #[must_use]
    pub fn matches(&self, folded: &str) -> bool {
        self.triggers.iter().any(|t| folded.contains(t))
    }
}

/// The rule table, in evaluation order.
pub const RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::Help,
        triggers: &["помощь", "помоги"],
        reply: "Я могу помочь вам с покупкой аккаунтов, пополнением баланса, размещением \
            объявлений и ответить на вопросы о работе маркетплейса.",
    },
    ResponseRule {
        topic: Topic::Balance,
        triggers: &["баланс", "пополнить"],
        reply: "Для пополнения баланса перейдите в личный кабинет, откройте вкладку \
            \"Кошелек\" и нажмите кнопку \"Пополнить баланс\". Доступны способы оплаты: \
            карта, электронные кошельки, криптовалюта.",
    },
    ResponseRule {
        topic: Topic::Purchase,
        triggers: &["купить", "аккаунт"],
        reply: "В каталоге представлены различные Steam аккаунты. Вы можете фильтровать их \
            по цене и характеристикам. После выбора нажмите \"Купить сейчас\" и средства \
            спишутся с вашего баланса.",
    },
    ResponseRule {
        topic: Topic::Selling,
        triggers: &["продать", "разместить"],
        reply: "Чтобы разместить свой аккаунт на продажу, войдите в личный кабинет, перейдите \
            во вкладку \"Продажи\" и нажмите \"Разместить аккаунт\". Укажите характеристики \
            и желаемую цену.",
    },
    ResponseRule {
        topic: Topic::Safety,
        triggers: &["безопас", "гарант"],
        reply: "Все сделки проходят через систему гарантий. Мы проверяем каждый аккаунт перед \
            размещением. Ваши средства защищены на время проверки покупки.",
    },
    ResponseRule {
        topic: Topic::Greeting,
        triggers: &["привет", "здравствуй"],
        reply: "Привет! Рад помочь вам с любыми вопросами по LevelUp Market!",
    },
    ResponseRule {
        topic: Topic::Thanks,
        triggers: &["спасибо", "благодар"],
        reply: "Всегда рад помочь! Если возникнут ещё вопросы — обращайтесь!",
    },
];

/// Find the first rule that fires for `input`, if any.
#[must_use]
pub fn matching_rule(input: &str) -> Option<&'static ResponseRule> {
    let folded = input.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&folded))
}

/// Which topic `input` is about, or `None` when it falls through to support.
#[must_use]
pub fn classify(input: &str) -> Option<Topic> {
    matching_rule(input).map(|rule| rule.topic)
}

/// Pick the assistant's reply to `input`.
///
/// Never fails and never returns an empty string.
#[must_use]
pub fn select_response(input: &str) -> &'static str {
    matching_rule(input).map_or(FALLBACK_REPLY, |rule| rule.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_for(topic: Topic) -> &'static str {
        RULES
            .iter()
            .find(|r| r.topic == topic)
            .map(|r| r.reply)
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(select_response(""), FALLBACK_REPLY);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_uppercase_greeting() {
        assert_eq!(select_response("ПРИВЕТ"), reply_for(Topic::Greeting));
    }

    #[test]
    fn test_balance_beats_later_rules() {
        assert_eq!(
            select_response("Как пополнить баланс и купить аккаунт? Спасибо"),
            reply_for(Topic::Balance)
        );
    }

    #[test]
    fn test_help_beats_balance() {
        assert_eq!(
            classify("Помогите, нужна помощь с балансом"),
            Some(Topic::Help)
        );
    }

    #[test]
    fn test_purchase_precedes_safety() {
        assert_eq!(
            classify("Можно ли вернуть аккаунт, это безопасно?"),
            Some(Topic::Purchase)
        );
    }

    #[test]
    fn test_substring_not_word_boundary() {
        assert_eq!(classify("небезопасно"), Some(Topic::Safety));
        assert_eq!(classify("благодарю"), Some(Topic::Thanks));
        assert_eq!(classify("Здравствуйте"), Some(Topic::Greeting));
    }

    #[test]
    fn test_unrelated_text_falls_back() {
        assert_eq!(select_response("What's the weather?"), FALLBACK_REPLY);
        assert_eq!(select_response("🎮🎮🎮"), FALLBACK_REPLY);
    }

    #[test]
    fn test_every_rule_reachable_and_non_empty() {
        for rule in RULES {
            assert!(!rule.reply.is_empty());
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
            let first = rule.triggers.first().copied().unwrap_or_default();
            assert_eq!(classify(first), Some(rule.topic));
        }
    }
}
