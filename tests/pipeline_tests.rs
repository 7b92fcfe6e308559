//! End-to-end command behavior on an in-memory host.

use bufcalc::host::fake::FakeEditor;
use bufcalc::{CalcPlugin, EchoChannel, LogLevel, SettingsUpdate};

fn plugin_over<const N: usize>(lines: [&str; N]) -> CalcPlugin<FakeEditor> {
    let _ = env_logger::builder().is_test(true).try_init();
    CalcPlugin::new(FakeEditor::with_lines(lines))
}

fn update(float_format: Option<&str>, log_level: Option<&str>) -> SettingsUpdate {
    SettingsUpdate {
        float_format: float_format.map(str::to_string),
        log_level: log_level.map(str::to_string),
        ..Default::default()
    }
}

mod calculate {
    use super::*;

    #[test]
    fn replaces_selection_with_formatted_result() {
        let mut plugin = plugin_over(["2+2"]);
        plugin.host_mut().select((1, 1), (1, 3));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["4.000"]);
        assert!(!plugin.host().in_selection());
    }

    #[test]
    fn backward_selection_normalizes() {
        let mut plugin = plugin_over(["2+2"]);
        plugin.host_mut().select((1, 3), (1, 1));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["4.000"]);
    }

    #[test]
    fn surrounding_text_survives() {
        let mut plugin = plugin_over(["total: 2+2 items"]);
        plugin.host_mut().select((1, 8), (1, 10));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["total: 4.000 items"]);
    }

    #[test]
    fn whole_line_selection_evaluates_the_entire_line() {
        let mut plugin = plugin_over(["10/4"]);
        plugin.host_mut().select_line(1);

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["2.500"]);
        assert!(!plugin.host().in_selection());
    }

    #[test]
    fn multi_line_selection_collapses_to_one_line() {
        let mut plugin = plugin_over(["x = 12+", "30 # sum"]);
        plugin.host_mut().select((1, 5), (2, 2));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["x = 42.000 # sum"]);
    }

    #[test]
    fn non_expression_leaves_the_buffer_untouched() {
        let mut plugin = plugin_over(["hello"]);
        plugin.host_mut().select((1, 1), (1, 5));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["hello"]);
        assert!(!plugin.host().in_selection(), "selection mode must still exit");
        assert!(
            plugin
                .host()
                .echoes()
                .iter()
                .all(|(channel, _)| *channel != EchoChannel::Error),
            "a failed evaluation is not an error"
        );
    }

    #[test]
    fn failed_evaluation_with_padding_is_a_noop_restore() {
        let mut plugin = plugin_over([" hello "]);
        plugin.host_mut().select((1, 1), (1, 7));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), [" hello "]);
        assert!(!plugin.host().in_selection());
    }

    #[test]
    fn empty_line_visual_selection_aborts_fatally() {
        let mut plugin = plugin_over([""]);
        plugin.host_mut().select_line(1);

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), [""]);
        let fatal = plugin
            .host()
            .echoes()
            .iter()
            .find(|(channel, _)| *channel == EchoChannel::Error)
            .expect("range failure must be echoed");
        assert!(fatal.1.contains("[FATAL]"));
    }

    #[test]
    fn honors_a_configured_one_decimal_format() {
        let mut plugin = plugin_over(["1/3"]);
        plugin.set_format("0.1f");
        plugin.host_mut().select((1, 1), (1, 3));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["0.3"]);
    }

    #[test]
    fn comma_grouping_applies_when_enabled() {
        let mut plugin = plugin_over(["1,000*2"]);
        plugin.setup(&SettingsUpdate {
            comma_separators: Some(true),
            ..Default::default()
        });
        plugin.host_mut().select((1, 1), (1, 7));

        plugin.calculate();

        assert_eq!(plugin.host().buffer(), ["2000.000"]);
    }
}

mod format_number {
    use super::*;

    #[test]
    fn reformats_a_numeric_selection_without_evaluating() {
        let mut plugin = plugin_over(["3.14159"]);
        plugin.host_mut().select((1, 1), (1, 7));

        plugin.format_number(Some("0.2f"));

        assert_eq!(plugin.host().buffer(), ["3.14"]);
    }

    #[test]
    fn uses_the_configured_format_by_default() {
        let mut plugin = plugin_over(["3.14159"]);
        plugin.setup(&update(Some("0.1f"), None));
        plugin.host_mut().select((1, 1), (1, 7));

        plugin.format_number(None);

        assert_eq!(plugin.host().buffer(), ["3.1"]);
    }

    #[test]
    fn aborts_on_non_numeric_text() {
        let mut plugin = plugin_over(["2+2"]);
        plugin.host_mut().select((1, 1), (1, 3));

        plugin.format_number(None);

        assert_eq!(plugin.host().buffer(), ["2+2"], "expressions are not re-formatted");
        assert!(!plugin.host().in_selection());
    }

    #[test]
    fn rejects_an_invalid_override_spec_without_mutation() {
        let mut plugin = plugin_over(["3.14"]);
        plugin.setup(&update(None, Some("error")));
        plugin.host_mut().select((1, 1), (1, 4));

        plugin.format_number(Some("not-a-spec"));

        assert_eq!(plugin.host().buffer(), ["3.14"]);
        let error = plugin
            .host()
            .echoes()
            .iter()
            .find(|(channel, _)| *channel == EchoChannel::Error)
            .expect("invalid spec must be echoed at ERROR");
        assert!(error.1.contains("[ERROR]"));
    }
}

mod setup {
    use super::*;

    #[test]
    fn invalid_log_level_keeps_the_prior_value() {
        let mut plugin = plugin_over(["unused"]);
        plugin.setup(&update(None, Some("error")));

        plugin.setup(&update(None, Some("bogus")));

        assert_eq!(plugin.settings().log_level, LogLevel::Error);
        let error = plugin
            .host()
            .echoes()
            .iter()
            .find(|(channel, _)| *channel == EchoChannel::Error)
            .expect("invalid level must be echoed at ERROR");
        assert!(error.1.contains("[ERROR]"));
        assert!(error.1.contains("bogus"));
    }

    #[test]
    fn valid_fields_apply_even_when_others_fail() {
        let mut plugin = plugin_over(["unused"]);

        plugin.setup(&update(Some("0.1f"), Some("bogus")));

        assert_eq!(plugin.settings().float_format, "0.1f".parse().unwrap());
        assert_eq!(plugin.settings().log_level, LogLevel::Fatal);
    }

    #[test]
    fn debug_threshold_echoes_the_applied_settings() {
        let mut plugin = plugin_over(["unused"]);

        plugin.setup(&update(Some("0.2f"), Some("debug")));
        plugin.setup(&update(None, None));

        let echoed = plugin
            .host()
            .echoes()
            .iter()
            .any(|(_, message)| message.contains("Using float_format: 0.2f"));
        assert!(echoed, "DEBUG threshold must echo configuration lines");
    }
}
