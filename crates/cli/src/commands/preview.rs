use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path as UrlPath, State},
    http::{StatusCode, header},
    response::{
        Html, IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use chrono::Utc;
use conference_kit_core::{Conference, Language};
use conference_kit_generator::{
    Environment, Page, RenderOptions, assets, html_escape, render_page, render_walkthrough_page,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

use super::schedule::{CheckedEdition, check_edition, load_conference};

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with hot reload for local development.
///
/// Pages are re-rendered from site.toml and the data files on every request,
/// so edits show up on the next reload. Invalid schedules render an error
/// page listing every defect instead of the landing page.
///
/// # Arguments
///
/// * `path` - Path to site directory containing site.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🎤 Starting preview server...");
    println!("   Site: {}", path.display());

    let conference = load_conference(&path)?;
    println!("   ✓ Loaded: {}", conference.event.name);
    for edition in conference.editions() {
        println!(
            "   ✓ Edition: {} ({})",
            edition.url_path(),
            edition.language.code()
        );
    }

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };

    let app = router(state, &path);

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState, path: &std::path::Path) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/{lang}", get(redirect_handler))
        .route("/{lang}/", get(edition_handler))
        .route("/walk-through", get(|| async { Redirect::permanent("/walk-through/") }))
        .route("/walk-through/", get(walkthrough_index_handler))
        .route("/{lang}/walk-through", get(walkthrough_redirect_handler))
        .route("/{lang}/walk-through/", get(walkthrough_edition_handler))
        .route("/css/style.css", get(stylesheet_handler))
        .route("/js/site.js", get(script_handler))
        .route("/_reload", get(sse_handler))
        .nest_service("/assets", ServeDir::new(path.join("assets")))
        .nest_service("/data", ServeDir::new(path.join("data")))
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    let output_dirs = [path.join("dist"), path.join("docs")];

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Skip editor temp files and build output
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.')
                        && !filename.ends_with('~')
                        && !output_dirs.iter().any(|dir| p.starts_with(dir))
                }) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn stylesheet_handler() -> Response {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], assets::stylesheet()).into_response()
}

async fn script_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        assets::site_js(),
    )
        .into_response()
}

async fn index_handler(State(state): State<AppState>) -> Response {
    render_edition(&state, None, Page::Landing)
}

async fn edition_handler(
    State(state): State<AppState>,
    UrlPath(lang): UrlPath<String>,
) -> Response {
    match Language::from_code(&lang) {
        Some(language) => render_edition(&state, Some(language), Page::Landing),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

async fn redirect_handler(UrlPath(lang): UrlPath<String>) -> Response {
    match Language::from_code(&lang) {
        Some(language) => Redirect::permanent(&format!("/{}/", language.code())).into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

async fn walkthrough_index_handler(State(state): State<AppState>) -> Response {
    render_edition(&state, None, Page::Walkthrough)
}

async fn walkthrough_edition_handler(
    State(state): State<AppState>,
    UrlPath(lang): UrlPath<String>,
) -> Response {
    match Language::from_code(&lang) {
        Some(language) => render_edition(&state, Some(language), Page::Walkthrough),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

async fn walkthrough_redirect_handler(UrlPath(lang): UrlPath<String>) -> Response {
    match Language::from_code(&lang) {
        Some(language) => {
            Redirect::permanent(&format!("/{}/walk-through/", language.code())).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Render `page` of the edition in `language`, or of the base edition when
/// `None`
fn render_edition(state: &AppState, requested: Option<Language>, page: Page) -> Response {
    let conference = match load_conference(&state.site_path) {
        Ok(c) => c,
        Err(e) => {
            return error_page("Configuration Error", &[format!("{:#}", e)]);
        }
    };

    let language = requested.unwrap_or(conference.site.language);
    let Some(edition) = conference
        .editions()
        .into_iter()
        .find(|e| e.language == language)
    else {
        return (StatusCode::NOT_FOUND, "No edition for this language").into_response();
    };
    if page == Page::Walkthrough && edition.walkthrough.is_none() {
        return (StatusCode::NOT_FOUND, "No walk-through for this edition").into_response();
    }
    if requested.is_some() && edition.is_base {
        let target = match page {
            Page::Landing => "/",
            Page::Walkthrough => "/walk-through/",
        };
        return Redirect::permanent(target).into_response();
    }

    render_checked(&conference, check_edition(&state.site_path, edition), page)
}

fn render_checked(conference: &Conference, checked: CheckedEdition, page: Page) -> Response {
    let options = RenderOptions {
        inline_assets: false,
        preview: true,
        environment: Environment::Development,
        version: env!("CARGO_PKG_VERSION").to_string(),
        now: Utc::now(),
    };

    if page == Page::Walkthrough {
        return match checked.walkthrough {
            Ok(info) => Html(render_walkthrough_page(
                conference,
                &checked.edition,
                info.as_ref(),
                &options,
            ))
            .into_response(),
            Err(e) => error_page("Walk-through Error", &[e.to_string()]),
        };
    }

    let schedule = match checked.checked {
        Ok(schedule) => schedule,
        Err(e) => {
            let message = format!("{}: {}", checked.schedule_path.display(), e);
            return error_page("Schedule Error", &[message]);
        }
    };
    let Some(document) = schedule.document else {
        let title = format!(
            "Schedule Validation Failed: {}",
            checked.schedule_path.display()
        );
        return error_page(&title, &schedule.report.messages());
    };

    Html(render_page(conference, &checked.edition, &document, &options)).into_response()
}

/// Error page shown in place of the landing page; reloads like the real one
fn error_page(title: &str, messages: &[String]) -> Response {
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", html_escape(m)))
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="UTF-8"><title>Error</title>
<style>
    body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; padding: 2rem; color: #333; }}
    h1 {{ color: #c0392b; font-size: 1.5rem; }}
    li {{ font-family: monospace; margin: 0.25rem 0; }}
</style>
</head><body>
<h1>{}</h1>
<ul>{}</ul>
<script>
    const eventSource = new EventSource('/_reload');
    eventSource.onmessage = () => location.reload();
</script>
</body></html>"#,
        html_escape(title),
        items
    ))
    .into_response()
}
