/// Shared stylesheet for every edition. The accent color and category rules
/// are emitted per page since they come from configuration and schedule data.
pub fn stylesheet() -> &'static str {
    r#":root {
    --accent: #3498db;
    --text: #222831;
    --muted: #6b7280;
    --surface: #ffffff;
    --surface-alt: #f5f7fa;
    --border: #e2e8f0;
    --radius: 10px;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: "Pretendard", "Noto Sans KR", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    color: var(--text);
    background: var(--surface-alt);
    line-height: 1.6;
}

a {
    color: var(--accent);
}

.navbar {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1.5rem;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
}

.nav-brand {
    font-weight: 700;
    color: var(--text);
    text-decoration: none;
}

.nav-menu {
    display: flex;
    gap: 1.25rem;
    list-style: none;
    margin: 0;
    padding: 0;
}

.nav-link {
    color: var(--text);
    text-decoration: none;
}

.hamburger {
    display: none;
    background: none;
    border: 0;
    font-size: 1.5rem;
    cursor: pointer;
}

.language-switcher {
    display: flex;
    gap: 0.5rem;
}

.language-switcher a {
    padding: 0.2rem 0.6rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    font-size: 0.85rem;
    text-decoration: none;
}

.language-switcher a.active {
    background: var(--accent);
    border-color: var(--accent);
    color: #fff;
}

.hero {
    padding: 5rem 1.5rem 4rem;
    text-align: center;
    color: #fff;
    background: linear-gradient(135deg, var(--accent), #1f2937);
}

.hero h1 {
    margin: 0 0 0.5rem;
    font-size: clamp(2rem, 5vw, 3.25rem);
}

.hero-tagline {
    margin: 0 0 1.5rem;
    font-size: 1.25rem;
    opacity: 0.9;
}

.hero-meta {
    margin: 0 0 2rem;
}

.register-button {
    display: inline-block;
    padding: 0.8rem 2rem;
    border-radius: 999px;
    background: #fff;
    color: var(--accent);
    font-weight: 700;
    text-decoration: none;
}

.countdown {
    display: flex;
    justify-content: center;
    gap: 1rem;
    margin: 2rem 0 0;
}

.countdown-unit {
    min-width: 4.5rem;
    padding: 0.75rem;
    border-radius: var(--radius);
    background: rgba(255, 255, 255, 0.15);
}

.countdown-value {
    display: block;
    font-size: 2rem;
    font-weight: 700;
}

.countdown-started {
    font-size: 1.25rem;
    font-weight: 700;
}

.section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 3.5rem 1.5rem;
}

.section h2 {
    margin-top: 0;
}

.category-legend {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}

.category-chip,
.program-category {
    display: inline-block;
    padding: 0.1rem 0.6rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    font-size: 0.8rem;
}

.program-grid-wrapper {
    overflow-x: auto;
}

.program-grid {
    width: 100%;
    border-collapse: separate;
    border-spacing: 0.5rem;
}

.program-grid th {
    text-align: left;
    color: var(--muted);
    font-weight: 600;
}

.slot-time {
    white-space: nowrap;
    font-variant-numeric: tabular-nums;
    color: var(--muted);
    vertical-align: top;
}

.program-card {
    padding: 0.9rem 1rem;
    margin-bottom: 0.5rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--surface);
    cursor: pointer;
}

.program-card:hover,
.program-card:focus {
    outline: 2px solid var(--accent);
}

.program-plenary .program-card {
    text-align: center;
}

.program-title {
    margin: 0.4rem 0 0.2rem;
    font-size: 1.05rem;
}

.program-speaker {
    margin: 0;
    color: var(--muted);
    font-size: 0.9rem;
}

.modal {
    display: none;
    position: fixed;
    inset: 0;
    z-index: 20;
    background: rgba(0, 0, 0, 0.55);
}

.modal.open {
    display: flex;
    align-items: center;
    justify-content: center;
}

.modal-content {
    position: relative;
    width: min(600px, 92vw);
    max-height: 85vh;
    overflow-y: auto;
    padding: 2rem;
    border-radius: var(--radius);
    background: var(--surface);
}

.modal-close {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    border: 0;
    background: none;
    font-size: 1.5rem;
    cursor: pointer;
}

.modal-meta {
    color: var(--muted);
}

.modal-description {
    white-space: pre-line;
}

.walkthrough-header {
    padding: 3rem 1.5rem 1rem;
    text-align: center;
}

.walkthrough-subtitle {
    color: var(--muted);
    font-size: 1.15rem;
}

.walkthrough-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}

.walkthrough-card {
    display: flex;
    flex-direction: column;
    overflow: hidden;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: var(--radius);
}

.walkthrough-card-thumbnail {
    aspect-ratio: 16 / 9;
    background: var(--surface-alt);
}

.walkthrough-card-thumbnail img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.walkthrough-card-content {
    display: flex;
    flex: 1;
    flex-direction: column;
    padding: 1rem 1.25rem 1.25rem;
}

.walkthrough-card-description {
    flex: 1;
    color: var(--muted);
}

.walkthrough-go-button {
    align-self: flex-start;
    padding: 0.5rem 1.25rem;
    border-radius: 999px;
    background: var(--accent);
    color: #ffffff;
    text-decoration: none;
    font-weight: 600;
}

.footer {
    padding: 2rem 1.5rem;
    text-align: center;
    color: var(--muted);
    font-size: 0.85rem;
}

@media (max-width: 720px) {
    .hamburger {
        display: block;
    }

    .nav-menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1rem 1.5rem;
        background: var(--surface);
        border-bottom: 1px solid var(--border);
    }

    .nav-menu.active {
        display: flex;
    }
}
"#
}

/// Client script: navigation, program detail modal and the ticking countdown.
/// Reads everything it needs from data attributes rendered into the page.
pub fn site_js() -> &'static str {
    r#"(function () {
    'use strict';

    function setupNavigation() {
        const hamburger = document.querySelector('.hamburger');
        const navMenu = document.querySelector('.nav-menu');
        if (!hamburger || !navMenu) {
            return;
        }

        hamburger.addEventListener('click', function () {
            navMenu.classList.toggle('active');
        });

        navMenu.querySelectorAll('.nav-link').forEach(function (link) {
            link.addEventListener('click', function () {
                navMenu.classList.remove('active');
            });
        });
    }

    function setupModal() {
        const modal = document.getElementById('program-modal');
        if (!modal) {
            return;
        }

        const fields = {
            title: modal.querySelector('.modal-title'),
            time: modal.querySelector('.modal-time'),
            location: modal.querySelector('.modal-location'),
            speaker: modal.querySelector('.modal-speaker'),
            affiliation: modal.querySelector('.modal-affiliation'),
            content: modal.querySelector('.modal-description')
        };

        function open(card) {
            Object.keys(fields).forEach(function (key) {
                if (fields[key]) {
                    fields[key].textContent = card.dataset[key] || '';
                }
            });
            modal.classList.add('open');
            document.body.style.overflow = 'hidden';
        }

        function close() {
            modal.classList.remove('open');
            document.body.style.overflow = '';
        }

        document.querySelectorAll('.program-card').forEach(function (card) {
            card.addEventListener('click', function () {
                open(card);
            });
            card.addEventListener('keydown', function (e) {
                if (e.key === 'Enter') {
                    open(card);
                }
            });
        });

        const closeButton = modal.querySelector('.modal-close');
        if (closeButton) {
            closeButton.addEventListener('click', close);
        }

        modal.addEventListener('click', function (e) {
            if (e.target === modal) {
                close();
            }
        });

        document.addEventListener('keydown', function (e) {
            if (e.key === 'Escape') {
                close();
            }
        });
    }

    function setupCountdown() {
        const countdown = document.getElementById('countdown');
        if (!countdown) {
            return;
        }

        const target = new Date(countdown.dataset.target);
        if (isNaN(target)) {
            return;
        }

        const units = {
            days: countdown.querySelector('[data-unit="days"]'),
            hours: countdown.querySelector('[data-unit="hours"]'),
            minutes: countdown.querySelector('[data-unit="minutes"]'),
            seconds: countdown.querySelector('[data-unit="seconds"]')
        };

        function pad(value) {
            return String(value).padStart(2, '0');
        }

        function tick() {
            const remaining = Math.floor((target - new Date()) / 1000);
            if (remaining <= 0) {
                countdown.innerHTML = '';
                const started = document.createElement('p');
                started.className = 'countdown-started';
                started.textContent = countdown.dataset.startedLabel || '';
                countdown.appendChild(started);
                clearInterval(timer);
                return;
            }
            if (!units.days) {
                return;
            }

            units.days.textContent = Math.floor(remaining / 86400);
            units.hours.textContent = pad(Math.floor((remaining % 86400) / 3600));
            units.minutes.textContent = pad(Math.floor((remaining % 3600) / 60));
            units.seconds.textContent = pad(remaining % 60);
        }

        const timer = setInterval(tick, 1000);
        tick();
    }

    document.addEventListener('DOMContentLoaded', function () {
        setupNavigation();
        setupModal();
        setupCountdown();
    });
})();
"#
}
