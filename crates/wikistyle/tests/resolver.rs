//! End-to-end tests: resolving kinds, laying out pages, loading theme files.

use std::fs;

use wikistyle::{
    classify, color_for, layout, ColorMode, ColorPair, Edge, LayoutMetrics, LayoutNode,
    ObjectKind, RenderSpec, Rgb, Role, Theme, ThemeError, ThemeResolver,
};

// ============================================================================
// Kind colors
// ============================================================================

#[test]
fn every_kind_has_a_distinct_hover_color() {
    for kind in ObjectKind::ALL {
        let pair = color_for(kind);
        assert_ne!(pair.base, pair.hover, "{}", kind);
    }
}

#[test]
fn classify_known_and_unknown_tags() {
    assert_eq!(classify("atom"), Some(ObjectKind::Atom));
    assert_eq!(classify("relation"), Some(ObjectKind::Relation));
    assert_eq!(classify("abstract"), Some(ObjectKind::Abstract));
    assert_eq!(classify("unknown"), None);
}

#[test]
fn unknown_tag_renders_unstyled() {
    let resolver = ThemeResolver::default();
    assert_eq!(resolver.style_for_tag("unknown"), None);

    let spec = resolver.layout(&LayoutNode::link("?", "unknown"));
    assert_eq!(spec.colors, None);
}

// ============================================================================
// Layout
// ============================================================================

fn sample_page() -> LayoutNode {
    LayoutNode::page(
        vec![
            LayoutNode::link("Personnage", "abstract"),
            LayoutNode::link("PJ", "atom"),
        ],
        vec![LayoutNode::VBox(vec![
            LayoutNode::link("Joe", "atom"),
            LayoutNode::HBox(vec![
                LayoutNode::link("Ami de", "relation"),
                LayoutNode::link("Alice", "atom"),
            ]),
            LayoutNode::link("Ennemi de", "relation"),
        ])],
    )
}

#[test]
fn box_children_gap_skips_first_child() {
    for node in [
        LayoutNode::VBox(vec![
            LayoutNode::link("A", "atom"),
            LayoutNode::link("B", "atom"),
            LayoutNode::link("C", "atom"),
        ]),
        LayoutNode::HBox(vec![
            LayoutNode::link("A", "atom"),
            LayoutNode::link("B", "atom"),
            LayoutNode::link("C", "atom"),
        ]),
    ] {
        let spec = layout(&node);
        let gaps: Vec<u32> = spec.children.iter().map(RenderSpec::leading_gap).collect();
        let gap = LayoutMetrics::default().box_gap;
        assert_eq!(gaps, vec![0, gap, gap]);
        assert!(spec.children.iter().all(|c| c.flex_grow == 1));
    }
}

#[test]
fn nav_rail_does_not_grow_and_main_does() {
    let spec = layout(&sample_page());
    assert_eq!(spec.role, Role::HBox);

    let nav = &spec.children[0];
    let main = &spec.children[1];
    assert_eq!(nav.role, Role::Nav);
    assert_eq!(nav.flex_grow, 0);
    assert_eq!(nav.pinned, Some(Edge::Left));
    assert_eq!(main.role, Role::Main);
    assert!(main.flex_grow > 0);
    assert_eq!(main.margin, LayoutMetrics::default().main_margin);
}

#[test]
fn layout_is_idempotent() {
    let page = sample_page();
    let resolver = ThemeResolver::default();
    assert_eq!(resolver.layout(&page), resolver.layout(&page));
    assert_eq!(
        resolver.layout(&page).to_json().unwrap(),
        resolver.layout(&page).to_json().unwrap()
    );
}

#[test]
fn page_links_carry_kind_colors() {
    let theme = Theme::new();
    let spec = ThemeResolver::new(theme.clone())
        .with_mode(ColorMode::Dark)
        .layout(&sample_page());

    let nav_links = &spec.children[0].children;
    assert_eq!(nav_links[0].kind, Some(ObjectKind::Abstract));
    assert_eq!(
        nav_links[0].colors,
        Some(theme.color_for_mode(ObjectKind::Abstract, ColorMode::Dark))
    );
}

#[test]
fn render_spec_json_shape() {
    let spec = layout(&LayoutNode::HBox(vec![LayoutNode::link("Joe", "atom")]));
    let json: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();

    assert_eq!(json["role"], "hbox");
    assert_eq!(json["flow"], "row");
    let child = &json["children"][0];
    assert_eq!(child["kind"], "atom");
    assert_eq!(child["label"], "Joe");
    assert_eq!(child["leading"]["edge"], "left");
    assert_eq!(child["leading"]["px"], 0);
    assert_eq!(child["colors"]["base"], color_for(ObjectKind::Atom).base.to_string());
}

// ============================================================================
// Stylesheets and theme files
// ============================================================================

#[test]
fn emitted_css_loads_back() {
    let theme = Theme::new()
        .with_colors(
            ObjectKind::Relation,
            ColorPair::new(Rgb::new(0x10, 0x20, 0x30), Rgb::new(0x40, 0x50, 0x60)),
        )
        .with_dark_colors(
            ObjectKind::Atom,
            Some(ColorPair::new(Rgb::new(1, 1, 1), Rgb::new(2, 2, 2))),
        )
        .with_metrics(LayoutMetrics {
            nav_width: 260,
            main_margin: 0,
            box_gap: 12,
        });

    let reloaded = Theme::from_css(&theme.to_css()).unwrap();
    assert_eq!(reloaded, theme);
}

#[test]
fn emitted_css_keeps_missing_dark_overrides_missing() {
    let theme = Theme::new()
        .with_dark_colors(ObjectKind::Atom, None)
        .with_dark_colors(ObjectKind::Abstract, None);

    let reloaded = Theme::from_css(&theme.to_css()).unwrap();
    assert_eq!(reloaded, theme);
    assert_eq!(reloaded.dark_override(ObjectKind::Atom), None);
    assert_eq!(
        reloaded.color_for_mode(ObjectKind::Atom, ColorMode::Dark),
        theme.color_for(ObjectKind::Atom)
    );
    assert_eq!(
        reloaded.dark_override(ObjectKind::Relation),
        Theme::new().dark_override(ObjectKind::Relation)
    );
}

#[test]
fn emitted_css_without_any_dark_overrides_loads_back() {
    let theme = ObjectKind::ALL
        .into_iter()
        .fold(Theme::named("light"), |theme, kind| {
            theme.with_dark_colors(kind, None)
        });

    let reloaded = Theme::from_css(&theme.to_css()).unwrap();
    for kind in ObjectKind::ALL {
        assert_eq!(
            reloaded.color_for_mode(kind, ColorMode::Dark),
            theme.color_for(kind)
        );
    }
}

#[test]
fn emitted_css_keeps_large_metrics_exact() {
    let theme = Theme::new().with_metrics(LayoutMetrics {
        nav_width: 16_777_217,
        main_margin: u32::MAX,
        box_gap: 3,
    });

    let reloaded = Theme::from_css(&theme.to_css()).unwrap();
    assert_eq!(reloaded.metrics(), theme.metrics());
}

#[test]
fn load_yaml_file_takes_name_from_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parchment.yaml");
    fs::write(
        &path,
        "kinds:\n  atom: { base: wheat, hover: khaki }\nlayout:\n  nav_width: 180\n",
    )
    .unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.name(), Some("parchment"));
    assert_eq!(
        theme.color_for(ObjectKind::Atom),
        ColorPair::new(Rgb::new(245, 222, 179), Rgb::new(240, 230, 140))
    );
    assert_eq!(theme.metrics().nav_width, 180);
}

#[test]
fn load_yaml_file_keeps_explicit_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.yml");
    fs::write(&path, "name: night\n").unwrap();

    assert_eq!(Theme::from_file(&path).unwrap().name(), Some("night"));
}

#[test]
fn load_css_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.css");
    fs::write(
        &path,
        ":root { --box-gap: 2px; }\na.abstract:hover { background-color: #000; }\n",
    )
    .unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.name(), Some("site"));
    assert_eq!(theme.metrics().box_gap, 2);
    assert_eq!(theme.color_for(ObjectKind::Abstract).hover, Rgb::new(0, 0, 0));
}

#[test]
fn parse_error_reports_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "kinds: [\n").unwrap();

    let err = Theme::from_file(&path).unwrap_err();
    match &err {
        ThemeError::Parse { path: Some(p), .. } => assert_eq!(p, &path),
        other => panic!("Expected Parse with path, got {:?}", other),
    }
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(&path, "").unwrap();

    assert!(matches!(
        Theme::from_file(&path),
        Err(ThemeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn resolver_stylesheet_matches_theme() {
    let theme = Theme::named("paper");
    let resolver = ThemeResolver::new(theme.clone());
    assert_eq!(resolver.stylesheet(), theme.to_css());
    assert!(resolver.stylesheet().contains("a.atom:hover"));
}
