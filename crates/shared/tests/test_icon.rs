#[cfg(test)]
mod tests {
    use serde::{
        Deserialize,
        de::{IntoDeserializer, value::Error},
    };
    use shared::icon::IconTag;

    fn parse(tag: &str) -> IconTag {
        let de: serde::de::value::StrDeserializer<'_, Error> = tag.into_deserializer();
        IconTag::deserialize(de).unwrap()
    }

    #[test]
    fn test_known_tags_resolve() {
        assert_eq!(parse("github"), IconTag::Github);
        assert_eq!(parse("code2"), IconTag::Code2);
        assert_eq!(parse("mail"), IconTag::Mail);
        assert_eq!(parse("heart"), IconTag::Heart);
    }

    #[test]
    fn test_unknown_tag_renders_nothing() {
        let icon = parse("myspace");

        assert_eq!(icon, IconTag::Unknown);
        assert!(icon.icon_name().is_none());
        assert_eq!(IconTag::default(), IconTag::Unknown);
    }

    #[test]
    fn test_known_tags_have_an_icon() {
        for tag in ["github", "linkedin", "mail", "external", "phone", "zalo", "star"] {
            assert!(parse(tag).icon_name().is_some(), "{tag} has no icon");
        }
    }
}
