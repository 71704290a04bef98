use crate::countdown::Countdown;
use crate::labels::{Labels, labels};
use crate::{RenderOptions, assets};
use conference_kit_core::{Category, Conference, Edition, EventInfo, ProgramEntry, ScheduleDocument};
use pulldown_cmark::{Options, Parser, html};

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the event summary. The summary is operator-authored markdown.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// CSS rules for styled categories. Bare categories get none.
///
/// Colors are embedded as-is, so the schedule must have passed validation.
pub fn category_styles(schedule: &ScheduleDocument) -> String {
    schedule
        .categories
        .iter()
        .zip(schedule.category_classes())
        .filter_map(|(category, class)| match category {
            Category::Bare(_) => None,
            Category::Styled {
                color,
                background_color,
                border_color,
                ..
            } => {
                let declarations: Vec<String> = [
                    ("color", color),
                    ("background-color", background_color),
                    ("border-color", border_color),
                ]
                .into_iter()
                .filter_map(|(property, value)| {
                    value
                        .as_deref()
                        .filter(|v| !v.is_empty())
                        .map(|v| format!("{}: {};", property, v))
                })
                .collect();

                if declarations.is_empty() {
                    None
                } else {
                    Some(format!(".{} {{ {} }}", class, declarations.join(" ")))
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_program_card(
    program: &ProgramEntry,
    schedule: &ScheduleDocument,
    labels: &Labels,
) -> String {
    let location = if program.is_plenary() {
        labels.all_venues
    } else {
        program.location.as_str()
    };

    format!(
        r#"<div class="program-card {class}" tabindex="0" data-id="{id}" data-title="{title}" data-time="{time}" data-location="{location}" data-speaker="{speaker}" data-affiliation="{affiliation}" data-content="{content}">
                <span class="program-category {class}">{category}</span>
                <h3 class="program-title">{title}</h3>
                <p class="program-speaker">{speaker} · {affiliation}</p>
            </div>"#,
        class = schedule.category_class(&program.category).unwrap_or_default(),
        id = html_escape(&program.id),
        title = html_escape(&program.title),
        time = html_escape(&program.time),
        location = html_escape(location),
        speaker = html_escape(&program.speaker),
        affiliation = html_escape(&program.affiliation),
        content = html_escape(&program.content),
        category = html_escape(&program.category),
    )
}

/// Program grid: one row per time slot, one column per venue.
///
/// Entries at the "all" location get a row of their own spanning every venue
/// column, ahead of the slot's per-venue row.
pub fn render_program_grid(schedule: &ScheduleDocument, labels: &Labels) -> String {
    if schedule.programs.is_empty() {
        return format!(r#"<p class="program-empty">{}</p>"#, labels.empty_program);
    }

    let venues = schedule.venues();
    let span = venues.len().max(1);

    let header: String = venues
        .iter()
        .map(|venue| format!("<th>{}</th>", html_escape(venue)))
        .collect();

    let mut rows = Vec::new();
    for slot in schedule.time_slots() {
        let time = html_escape(slot.time);
        let (plenary, per_venue): (Vec<&ProgramEntry>, Vec<&ProgramEntry>) =
            slot.programs.into_iter().partition(|p| p.is_plenary());

        for program in plenary {
            rows.push(format!(
                r#"<tr class="program-plenary"><td class="slot-time">{}</td><td colspan="{}">{}</td></tr>"#,
                time,
                span,
                render_program_card(program, schedule, labels)
            ));
        }

        if !per_venue.is_empty() {
            let cells: String = venues
                .iter()
                .map(|venue| {
                    let cards: String = per_venue
                        .iter()
                        .filter(|p| p.location == *venue)
                        .map(|p| render_program_card(p, schedule, labels))
                        .collect();
                    format!("<td>{}</td>", cards)
                })
                .collect();
            rows.push(format!(
                r#"<tr><td class="slot-time">{}</td>{}</tr>"#,
                time, cells
            ));
        }
    }

    format!(
        r#"<div class="program-grid-wrapper">
        <table class="program-grid">
            <thead><tr><th>{}</th>{}</tr></thead>
            <tbody>
            {}
            </tbody>
        </table>
    </div>"#,
        labels.time,
        header,
        rows.join("\n            ")
    )
}

fn render_category_legend(schedule: &ScheduleDocument) -> String {
    let chips: String = schedule
        .categories
        .iter()
        .zip(schedule.category_classes())
        .map(|(category, class)| {
            format!(
                r#"<span class="category-chip {}">{}</span>"#,
                class,
                html_escape(category.name())
            )
        })
        .collect();
    format!(r#"<div class="category-legend">{}</div>"#, chips)
}

/// Countdown markup with the initial values filled in. The client script
/// keeps it ticking from `data-target`.
pub fn render_countdown(event: &EventInfo, labels: &Labels, options: &RenderOptions) -> String {
    let countdown = Countdown::between(event.countdown_target, options.now);
    let target = event.countdown_target.to_rfc3339();

    let body = if countdown.started {
        format!(
            r#"<p class="countdown-started">{}</p>"#,
            labels.countdown_started
        )
    } else {
        [
            ("days", countdown.days.to_string(), labels.days),
            ("hours", format!("{:02}", countdown.hours), labels.hours),
            ("minutes", format!("{:02}", countdown.minutes), labels.minutes),
            ("seconds", format!("{:02}", countdown.seconds), labels.seconds),
        ]
        .iter()
        .map(|(unit, value, label)| {
            format!(
                r#"<div class="countdown-unit"><span class="countdown-value" data-unit="{}">{}</span><span class="countdown-label">{}</span></div>"#,
                unit, value, label
            )
        })
        .collect()
    };

    format!(
        r#"<div class="countdown-block">
            <p class="countdown-title">{}</p>
            <div id="countdown" class="countdown" data-target="{}" data-started-label="{}">{}</div>
        </div>"#,
        labels.countdown_title,
        html_escape(&target),
        html_escape(labels.countdown_started),
        body
    )
}

/// Pages rendered for every edition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Walkthrough,
}

impl Page {
    /// Directory of the page below its edition, with trailing slash
    fn dir(self) -> &'static str {
        match self {
            Page::Landing => "",
            Page::Walkthrough => "walk-through/",
        }
    }
}

/// Relative path from a page back to the site root
pub(crate) fn root_prefix(edition: &Edition, page: Page) -> String {
    let depth = usize::from(!edition.is_base) + usize::from(page == Page::Walkthrough);
    "../".repeat(depth)
}

/// Relative link from `page` of `from` to the same page of `target`.
/// Editions without a walk-through page are linked at their landing page.
fn language_link(from: &Edition, page: Page, target: &Edition) -> String {
    let target_page = if target.walkthrough.is_some() {
        page
    } else {
        Page::Landing
    };
    let target_dir = if target.is_base {
        String::new()
    } else {
        format!("{}/", target.language.code())
    };

    let link = format!("{}{}{}", root_prefix(from, page), target_dir, target_page.dir());
    if link.is_empty() {
        "./".to_string()
    } else {
        link
    }
}

pub(crate) fn render_language_switcher(
    conference: &Conference,
    edition: &Edition,
    page: Page,
) -> String {
    let editions = conference.editions();
    if editions.len() < 2 {
        return String::new();
    }

    let links: String = editions
        .iter()
        .map(|target| {
            let class = if target.language == edition.language {
                r#" class="active""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}" hreflang="{}"{}>{}</a>"#,
                language_link(edition, page, target),
                target.language.code(),
                class,
                labels(target.language).language_name
            )
        })
        .collect();

    format!(r#"<div class="language-switcher">{}</div>"#, links)
}

/// Stylesheet and script tags, linked from the site root or embedded
pub(crate) fn asset_tags(prefix: &str, options: &RenderOptions) -> (String, String) {
    if options.inline_assets {
        (
            format!("<style>\n{}</style>", assets::stylesheet()),
            format!("<script>\n{}</script>", assets::site_js()),
        )
    } else {
        (
            format!(r#"<link rel="stylesheet" href="{}css/style.css">"#, prefix),
            format!(r#"<script src="{}js/site.js"></script>"#, prefix),
        )
    }
}

/// Preview badge and live-reload hook; both empty outside preview mode
pub(crate) fn preview_chrome(options: &RenderOptions) -> (&'static str, &'static str) {
    if !options.preview {
        return ("", "");
    }

    (
        r#"<div class="preview-badge">PREVIEW MODE - Live Reload Active</div>"#,
        r#"<script>
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => location.reload();
        eventSource.onerror = () => eventSource.close();
    </script>"#,
    )
}

/// Generate the complete HTML for one edition's landing page
///
/// Shared between preview and build so the preview matches the deployed page.
pub fn render_page(
    conference: &Conference,
    edition: &Edition,
    schedule: &ScheduleDocument,
    options: &RenderOptions,
) -> String {
    let labels = labels(edition.language);
    let event = &edition.event;
    let (stylesheet, script) = asset_tags(&root_prefix(edition, Page::Landing), options);

    let register_html = event
        .registration_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<a class="register-button" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                html_escape(url),
                labels.register
            )
        })
        .unwrap_or_default();

    let address_html = event
        .address
        .as_deref()
        .map(|address| format!(r#"<p class="venue-address">{}</p>"#, html_escape(address)))
        .unwrap_or_default();

    let halls: String = schedule
        .venues()
        .iter()
        .map(|venue| format!("<li>{}</li>", html_escape(venue)))
        .collect();

    let (preview_badge, reload_script) = preview_chrome(options);

    let walkthrough_nav = if edition.walkthrough.is_some() {
        format!(
            r#"<li><a class="nav-link" href="{}">{}</a></li>"#,
            Page::Walkthrough.dir(),
            labels.nav_walkthrough
        )
    } else {
        String::new()
    };

    let date = event.date.format(labels.date_format).to_string();
    let build_time = options.now.format("%Y-%m-%d %H:%M UTC").to_string();
    let escaped_name = html_escape(&event.name);
    let escaped_tagline = html_escape(&event.tagline);
    let escaped_venue = html_escape(&event.venue);

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}" data-lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{tagline}">
    <title>{name}</title>
    {stylesheet}
    <style>
        :root {{ --accent: {accent}; }}
        {category_styles}
    </style>
</head>
<body>
    {preview_badge}
    <nav class="navbar">
        <a class="nav-brand" href="#top">{name}</a>
        <button class="hamburger" aria-label="menu">&#9776;</button>
        <ul class="nav-menu">
            <li><a class="nav-link" href="#about">{nav_about}</a></li>
            <li><a class="nav-link" href="#program">{nav_program}</a></li>
            <li><a class="nav-link" href="#venue">{nav_venue}</a></li>
            {walkthrough_nav}
        </ul>
        {language_switcher}
    </nav>

    <header id="top" class="hero">
        <h1>{name}</h1>
        <p class="hero-tagline">{tagline}</p>
        <p class="hero-meta">{date} · {venue}</p>
        {register}
        {countdown}
    </header>

    <section id="about" class="section">
        <h2>{nav_about}</h2>
        <div class="about-summary">{summary}</div>
    </section>

    <section id="program" class="section">
        <h2>{nav_program}</h2>
        {legend}
        {grid}
    </section>

    <section id="venue" class="section">
        <h2>{nav_venue}</h2>
        <p class="venue-name">{venue}</p>
        {address}
        <ul class="venue-halls">{halls}</ul>
    </section>

    <div id="program-modal" class="modal" role="dialog" aria-modal="true">
        <div class="modal-content">
            <button class="modal-close" aria-label="{close}">&times;</button>
            <h2 class="modal-title"></h2>
            <p class="modal-meta"><span class="modal-time"></span> · <span class="modal-location"></span></p>
            <p>{speaker_label}: <span class="modal-speaker"></span></p>
            <p>{affiliation_label}: <span class="modal-affiliation"></span></p>
            <div class="modal-description"></div>
        </div>
    </div>

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
        name = escaped_name,
        tagline = escaped_tagline,
        venue = escaped_venue,
        stylesheet = stylesheet,
        accent = conference.site.accent_color,
        category_styles = category_styles(schedule),
        preview_badge = preview_badge,
        nav_about = labels.nav_about,
        nav_program = labels.nav_program,
        nav_venue = labels.nav_venue,
        walkthrough_nav = walkthrough_nav,
        language_switcher = render_language_switcher(conference, edition, Page::Landing),
        date = date,
        register = register_html,
        countdown = render_countdown(event, labels, options),
        summary = render_markdown(&event.summary),
        legend = render_category_legend(schedule),
        grid = render_program_grid(schedule, labels),
        address = address_html,
        halls = halls,
        close = labels.close,
        speaker_label = labels.speaker,
        affiliation_label = labels.affiliation,
        version_label = labels.build_version,
        version = html_escape(&options.version),
        build_time_label = labels.build_time,
        build_time = build_time,
        script = script,
        reload_script = reload_script,
    )
}
