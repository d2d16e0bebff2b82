/**
 * Line Masking Tests
 *
 * Interpolations and quoted values are hidden behind fill characters
 * without moving any other character.
 */

#[cfg(test)]
mod mask_tests {
    use angular_template_scanner::scanner::{
        mask, mask_interpolations, mask_quoted_values, MaskedLine,
    };
    use regex::Regex;

    const LINES: &[&str] = &[
        "",
        "plain text",
        r#"<div id="x">"#,
        r#"<a title='{{ "é" }}' [x]="'ü'">{{ a<b }}</a>"#,
        r#"<p class="unterminated"#,
        "{{ unterminated",
        "{{}}{{}}",
    ];

    mod mask_fn {
        use super::*;

        #[test]
        fn should_fill_every_match_with_same_length() {
            let re = Regex::new(r"\d+").unwrap();
            assert_eq!(mask("a12b345c", &re, '#'), "a##b###c");
        }

        #[test]
        fn should_count_characters_not_bytes() {
            let re = Regex::new(r"é+").unwrap();
            assert_eq!(mask("xééy", &re, '*'), "x**y");
        }

        #[test]
        fn should_preserve_length_for_all_lines() {
            for line in LINES {
                let masked = MaskedLine::new(line);
                assert_eq!(masked.pure.chars().count(), line.chars().count(), "{line}");
                assert_eq!(masked.attr_flags.chars().count(), line.chars().count(), "{line}");
            }
        }
    }

    mod interpolations {
        use super::*;

        #[test]
        fn should_mask_each_interpolation() {
            assert_eq!(mask_interpolations("a{{b}}c{{ d }}"), "a^^^^^c^^^^^^^");
        }

        #[test]
        fn should_leave_unterminated_interpolation() {
            assert_eq!(mask_interpolations("{{ a < b"), "{{ a < b");
        }

        #[test]
        fn should_hide_markup_inside_interpolation() {
            assert_eq!(mask_interpolations("{{ a<b }}"), "^^^^^^^^^");
        }
    }

    mod quoted_values {
        use super::*;

        #[test]
        fn should_mask_double_and_single_quotes() {
            assert_eq!(
                mask_quoted_values(r#"<a b="c" d='e'>"#),
                "<a b=%%% d=%%%>"
            );
        }

        #[test]
        fn should_mask_empty_quotes() {
            assert_eq!(mask_quoted_values(r#"<a b="">"#), "<a b=%%>");
        }

        #[test]
        fn should_apply_after_interpolation_masking() {
            let masked = MaskedLine::new(r#"<a b="{{ "x" }}" c>"#);
            assert_eq!(masked.pure, r#"<a b="^^^^^^^^^" c>"#);
            assert_eq!(masked.attr_flags, "<a b=%%%%%%%%%%% c>");
        }
    }

    mod masked_line {
        use super::*;

        #[test]
        fn should_flag_columns_inside_values() {
            let masked = MaskedLine::new(r#"<div id="x">"#);
            assert!(!masked.is_attr_value_at(7));
            assert!(masked.is_attr_value_at(8));
            assert!(masked.is_attr_value_at(9));
            assert!(masked.is_attr_value_at(10));
            assert!(!masked.is_attr_value_at(11));
        }

        #[test]
        fn should_find_attr_name_before_value() {
            let masked = MaskedLine::new(r#"<div id="x" data-role="main">"#);
            assert_eq!(masked.attr_name_before(9), "id");
            assert_eq!(masked.attr_name_before(25), "data-role");
        }

        #[test]
        fn should_return_empty_attr_name_without_leading_space() {
            let masked = MaskedLine::new(r#"x="y""#);
            assert_eq!(masked.attr_name_before(3), "");
        }
    }
}
