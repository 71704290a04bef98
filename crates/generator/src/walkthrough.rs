use crate::RenderOptions;
use crate::html::{
    Page, asset_tags, html_escape, preview_chrome, render_language_switcher, root_prefix,
};
use crate::labels::{Labels, labels};
use conference_kit_core::{Conference, Edition, WalkthroughCard, WalkthroughInfo};

/// Resolve a data-file path against the site root. URLs and rooted paths are
/// used unchanged.
fn site_url(prefix: &str, path: &str) -> String {
    if path.contains("://") || path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}{}", prefix, path)
    }
}

/// Escaped header text, or the language's label when the data leaves it empty
fn or_label(value: Option<&str>, label: &str) -> String {
    html_escape(value.filter(|v| !v.is_empty()).unwrap_or(label))
}

/// Script URLs never leave the page as links
fn safe_link(link: &str) -> &str {
    if link.trim_start().to_ascii_lowercase().starts_with("javascript:") {
        "#"
    } else {
        link
    }
}

fn render_card(card: &WalkthroughCard, prefix: &str, labels: &Labels) -> String {
    let title = html_escape(&card.title);
    let thumbnail = card
        .thumbnail
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| {
            format!(
                r#"<div class="walkthrough-card-thumbnail"><img src="{}" alt="{}" loading="lazy"></div>"#,
                html_escape(&site_url(prefix, t)),
                title
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="walkthrough-card">
            {thumbnail}
            <div class="walkthrough-card-content">
                <h3 class="walkthrough-card-title">{title}</h3>
                <p class="walkthrough-card-description">{description}</p>
                <a href="{link}" class="walkthrough-go-button" target="_blank" rel="noopener noreferrer">{start}</a>
            </div>
        </div>"#,
        thumbnail = thumbnail,
        title = title,
        description = html_escape(&card.description),
        link = html_escape(safe_link(&card.link)),
        start = labels.walkthrough_start,
    )
}

/// Generate the walk-through page of one edition.
///
/// `info` is `None` when the edition's data file does not exist yet; the page
/// then carries the placeholder text of its language and no cards.
pub fn render_walkthrough_page(
    conference: &Conference,
    edition: &Edition,
    info: Option<&WalkthroughInfo>,
    options: &RenderOptions,
) -> String {
    let labels = labels(edition.language);
    let prefix = root_prefix(edition, Page::Walkthrough);
    let (stylesheet, script) = asset_tags(&prefix, options);
    let (preview_badge, reload_script) = preview_chrome(options);

    let title = or_label(info.map(|i| i.title.as_str()), labels.walkthrough_title);
    let subtitle = or_label(info.map(|i| i.subtitle.as_str()), labels.walkthrough_subtitle);
    let description = or_label(
        info.map(|i| i.description.as_str()),
        labels.walkthrough_description,
    );

    let cards = info.map(|i| i.walkthroughs.as_slice()).unwrap_or_default();
    let grid = if cards.is_empty() {
        format!(r#"<p class="program-empty">{}</p>"#, labels.walkthrough_empty)
    } else {
        let cards: String = cards
            .iter()
            .map(|card| render_card(card, &prefix, labels))
            .collect();
        format!(r#"<div class="walkthrough-grid">{}</div>"#, cards)
    };

    let build_time = options.now.format("%Y-%m-%d %H:%M UTC").to_string();
    let name = html_escape(&edition.event.name);

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}" data-lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{subtitle}">
    <title>{title} - {name}</title>
    {stylesheet}
    <style>
        :root {{ --accent: {accent}; }}
    </style>
</head>
<body>
    {preview_badge}
    <nav class="navbar">
        <a class="nav-brand" href="../">{name}</a>
        <button class="hamburger" aria-label="menu">&#9776;</button>
        <ul class="nav-menu">
            <li><a class="nav-link" href="../#about">{nav_about}</a></li>
            <li><a class="nav-link" href="../#program">{nav_program}</a></li>
            <li><a class="nav-link" href="../#venue">{nav_venue}</a></li>
            <li><a class="nav-link active" href="./">{nav_walkthrough}</a></li>
        </ul>
        {language_switcher}
    </nav>

    <header class="walkthrough-header">
        <h1 class="walkthrough-title">{title}</h1>
        <p class="walkthrough-subtitle">{subtitle}</p>
        <p class="walkthrough-description">{description}</p>
    </header>

    <section class="section">
        {grid}
    </section>

    <footer class="footer">
        <p>{name}</p>
        <p>{version_label} <span id="build-version">{version}</span> · {build_time_label} <span id="build-time">{build_time}</span></p>
    </footer>

    {script}
    {reload_script}
</body>
</html>
"##,
        lang = edition.language.code(),
        subtitle = subtitle,
        title = title,
        name = name,
        stylesheet = stylesheet,
        accent = conference.site.accent_color,
        preview_badge = preview_badge,
        nav_about = labels.nav_about,
        nav_program = labels.nav_program,
        nav_venue = labels.nav_venue,
        nav_walkthrough = labels.nav_walkthrough,
        language_switcher = render_language_switcher(conference, edition, Page::Walkthrough),
        description = description,
        grid = grid,
        version_label = labels.build_version,
        version = html_escape(&options.version),
        build_time_label = labels.build_time,
        build_time = build_time,
        script = script,
        reload_script = reload_script,
    )
}
