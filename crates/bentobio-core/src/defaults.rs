//! Built-in page shown when no configuration file is given.

use crate::config::PageConfig;
use crate::types::{CallToAction, CardSpec, ContentCell, IconToken, ProfileInfo, Span};

const THUMBNAIL_SEEDS: [u32; 6] = [1, 3, 4, 5, 7, 10];

fn icon_text(icon: IconToken, icon_background: &str, title: &str, subtitle: &str) -> ContentCell {
    ContentCell::IconText {
        icon,
        icon_background: icon_background.into(),
        title: title.into(),
        subtitle: subtitle.into(),
        action: None,
    }
}

/// The stock profile: eight cards in the order they flow on a wide screen.
pub fn default_page() -> PageConfig {
    let profile = ProfileInfo::new(
        "MuhFI",
        "Frontend | Designer | Creator",
        "https://avatar.iran.liara.run/public/1",
        "@muhfi",
    );

    let thumbnails = THUMBNAIL_SEEDS
        .iter()
        .map(|seed| format!("https://picsum.photos/200/200?random={seed}"))
        .collect();

    let cards = vec![
        CardSpec::new(icon_text(
            IconToken::Facebook,
            "facebook",
            "Muhammad Noviyanto",
            "facebook.com",
        ))
        .with_destination("https://facebook.com/muhammad.noviyanto.2025"),
        CardSpec::new(ContentCell::IconText {
            icon: IconToken::Music,
            icon_background: "black".into(),
            title: "TikTok".into(),
            subtitle: "@muhnov_".into(),
            action: Some(CallToAction::new("Follow 50", "tiktok")),
        })
        .with_destination("https://tiktok.com/@muhnov_"),
        CardSpec::new(ContentCell::MediaGrid {
            icon: IconToken::Instagram,
            icon_background: "instagram".into(),
            handle: "muh.noviyanto".into(),
            counter: Some(CallToAction::new("Follower 100", "blue")),
            thumbnails,
        })
        .with_destination("https://www.instagram.com/muh.noviyanto/")
        .with_spans(Span::Two, Span::Two),
        CardSpec::new(icon_text(IconToken::AtSign, "black", "MuhFI", "threads.com"))
            .with_destination("https://threads.net"),
        CardSpec::new(ContentCell::MapPin {
            image_url: "https://images.unsplash.com/photo-1524661135-423995f22d0b?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80".into(),
            label: "Indonesia".into(),
        })
        .with_destination("https://goo.gl/maps/5jLeApUdHk7j6VCX6")
        .with_background("map"),
        CardSpec::new(ContentCell::BrandPanel {
            icon: IconToken::MessageCircle,
            title: "Chat with me here!".into(),
            subtitle: "discord.gg".into(),
        })
        .with_destination("https://discord.gg/rNsHsk3W")
        .with_background("discord"),
        CardSpec::new(ContentCell::PreviewLink {
            icon: IconToken::Link,
            title: "Relume Websites".into(),
            subtitle: "relume.1stcollab.com".into(),
        })
        .with_destination("https://relume.1stcollab.com")
        .with_spans(Span::Two, Span::One),
        CardSpec::new(icon_text(IconToken::Globe, "orange", "My Portfolio", "muhfi.my.id"))
            .with_destination("https://muhfi.my.id"),
    ];

    PageConfig::new(profile, cards).with_footer("Muhammad Noviyanto")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentKind;

    #[test]
    fn default_page_is_valid() {
        let page = default_page();
        page.validate().unwrap();
        assert_eq!(page.cards.len(), 8);
        assert!(page.cards.iter().all(CardSpec::is_interactive));
    }

    #[test]
    fn default_page_uses_every_kind() {
        let page = default_page();
        let kinds: Vec<ContentKind> = page.cards.iter().map(|c| c.content.kind()).collect();
        for kind in [
            ContentKind::MediaGrid,
            ContentKind::MapPin,
            ContentKind::IconText,
            ContentKind::BrandPanel,
            ContentKind::PreviewLink,
        ] {
            assert!(kinds.contains(&kind), "missing {kind:?}");
        }
    }

    #[test]
    fn default_page_serializes_back() {
        let page = default_page();
        let json = serde_json::to_string_pretty(&page).unwrap();
        let parsed = PageConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, page);
    }
}
