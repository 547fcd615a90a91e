//! Fixed user-facing strings.
//!
//! The product ships Russian-only copy. Validators, defaults and the
//! seeder look literals up here by id instead of inlining them, so the
//! core stays language-neutral.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    /// Registration/profile rejection for users younger than 18.
    AgeRestriction,
    /// Placeholder stored when feedback is submitted without text.
    FeedbackPlaceholder,
    /// Title prefix for seeded news rows.
    SeedNewsTitle,
    /// Preamble prefix for seeded news rows.
    SeedNewsPreamble,
    /// Body prefix for seeded news rows.
    SeedNewsBody,
}

pub fn ru(id: MessageId) -> &'static str {
    match id {
        MessageId::AgeRestriction => "Для использования ресурса вам должно быть больше 18 лет",
        MessageId::FeedbackPlaceholder => "Без отзыва",
        MessageId::SeedNewsTitle => "Новость №",
        MessageId::SeedNewsPreamble => "Заголовок к новости №",
        MessageId::SeedNewsBody => "Случайная новость №",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_message_resolves_to_non_empty_copy() {
        let all = [
            MessageId::AgeRestriction,
            MessageId::FeedbackPlaceholder,
            MessageId::SeedNewsTitle,
            MessageId::SeedNewsPreamble,
            MessageId::SeedNewsBody,
        ];

        for id in all {
            assert!(!ru(id).is_empty());
        }
    }
}
