//! Output formatting for the built configuration

use serde_json::{Map, Value};
use theme_core::{ConfigurationError, IconRole, ThemeConfiguration};

/// Rendered markup per icon role, keyed by role name
fn rendered_icons(config: &ThemeConfiguration) -> Vec<(IconRole, String)> {
    IconRole::ALL
        .into_iter()
        .filter_map(|role| config.render_icon(role).map(|html| (role, html)))
        .collect()
}

pub fn json(
    config: &ThemeConfiguration,
    layout_only: bool,
    render_icons: bool,
) -> Result<String, ConfigurationError> {
    let mut value = if layout_only {
        serde_json::to_value(config.layout_config())?
    } else {
        config.to_json()?
    };

    if render_icons {
        let icons: Map<String, Value> = rendered_icons(config)
            .into_iter()
            .map(|(role, html)| (role.to_string(), Value::String(html)))
            .collect();
        if let Value::Object(root) = &mut value {
            root.insert("renderedIcons".to_string(), Value::Object(icons));
        }
    }

    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn text(config: &ThemeConfiguration, layout_only: bool, render_icons: bool) -> String {
    let app = &config.app;
    let mut lines = vec![
        format!("app.title = {}", app.title),
        format!("app.logo = {}", app.logo.render()),
        format!("app.contentWidth = {}", app.content_width),
        format!("app.contentLayoutNav = {}", app.content_layout_nav),
        format!("app.overlayNavFromBreakpoint = {}", app.overlay_nav_from_breakpoint),
        format!("app.enableI18n = {}", app.enable_i18n),
        format!("app.iconRenderer = {}", app.icon_renderer.name()),
    ];

    if !layout_only {
        lines.push(format!("app.theme = {}", app.theme));
        lines.push(format!("app.isRtl = {}", app.is_rtl));
        lines.push(format!("app.skin = {}", app.skin));
        lines.push(format!("app.routeTransition = {}", app.route_transition));
    }

    lines.push(format!("navbar.type = {}", config.navbar.kind));
    lines.push(format!("navbar.navbarBlur = {}", config.navbar.navbar_blur));
    lines.push(format!("footer.type = {}", config.footer.kind));

    let vertical = &config.vertical_nav;
    lines.push(format!(
        "verticalNav.isVerticalNavCollapsed = {}",
        vertical.is_vertical_nav_collapsed
    ));
    lines.push(format!(
        "verticalNav.defaultNavItemIconProps.icon = {}",
        vertical.default_nav_item_icon_props.icon
    ));
    if !layout_only {
        lines.push(format!(
            "verticalNav.isVerticalNavSemiDark = {}",
            vertical.is_vertical_nav_semi_dark
        ));
    }

    lines.push(format!("horizontalNav.type = {}", config.horizontal_nav.kind));
    lines.push(format!(
        "horizontalNav.transition = {}",
        config.horizontal_nav.transition
    ));

    for (role, desc) in config.icons.iter() {
        lines.push(format!("icons.{role}.icon = {}", desc.icon));
    }

    if render_icons {
        for (role, html) in rendered_icons(config) {
            lines.push(format!("rendered.{role} = {html}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_core::{build_theme_config, BreakpointTable};

    fn config() -> ThemeConfiguration {
        build_theme_config(&BreakpointTable::vuetify_v2()).unwrap()
    }

    #[test]
    fn test_text_output() {
        let out = text(&config(), false, false);
        assert!(out.contains("app.overlayNavFromBreakpoint = 976"));
        assert!(out.contains("navbar.type = sticky"));
        assert!(out.contains("footer.type = static"));
        assert!(out.contains("app.skin = default"));
        assert!(out.contains("icons.verticalNavUnPinned.icon = mdi-radiobox-blank"));
        assert!(!out.contains("rendered."));
    }

    #[test]
    fn test_text_layout_only_skips_theme_settings() {
        let out = text(&config(), true, true);
        assert!(!out.contains("app.skin"));
        assert!(!out.contains("isVerticalNavSemiDark"));
        assert!(out.contains("rendered.close = "));
    }

    #[test]
    fn test_json_with_rendered_icons() {
        let out = json(&config(), false, true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["app"]["theme"], "light");
        assert!(value["renderedIcons"]["chevronRight"]
            .as_str()
            .unwrap()
            .contains("mdi-chevron-right"));
    }

    #[test]
    fn test_json_layout_only() {
        let out = json(&config(), true, false).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["app"]["i18n"]["enable"], true);
        assert!(value["app"].get("theme").is_none());
        assert!(value.get("renderedIcons").is_none());
    }
}
