//! Full page shell.

use crate::models::portfolio::PersonalInfo;
use crate::models::{Portfolio, Section};
use crate::projects::catalog::{run_query, ProjectQuery};
use crate::render::achievements::render_achievements;
use crate::render::contact::{format_url, render_contact_form, render_contact_info, LinkKind};
use crate::render::fragments::Fragments;
use crate::render::html_escape;
use crate::render::projects::{render_controls, render_grid};
use crate::render::skills::render_skills;
use crate::render::stats::render_statistics;

/// Renders the whole single page. The project grid shows `query`'s result, or the featured-first
/// initial order when no control was given.
pub fn render_page(
    portfolio: &Portfolio,
    query: Option<&ProjectQuery>,
    fragments: &Fragments,
    year: i32,
) -> String {
    let info = &portfolio.personal_info;
    let name = html_escape(&info.name);
    let query = query.cloned().unwrap_or_else(ProjectQuery::initial);
    let result = run_query(&portfolio.projects, &query);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} | Portfolio</title>
    <link rel="stylesheet" href="/static/styles.css">
    {head}
</head>
<body>
    <div class="welcome-screen" id="welcomeScreen"><h1 class="welcome-title">Welcome</h1></div>
    <div class="scroll-indicator" id="scrollIndicator"></div>
    <div id="app" class="app-hidden">
{navbar}
        <section id="home" class="section hero">
            <h1 class="hero-title">Hi, I'm {hero_name}</h1>
            <p class="hero-subtitle"><span id="heroSubtitleText" data-text="{title}"></span><span class="typewriter-cursor"></span></p>
            <p class="hero-description">{description}</p>
            <div class="hero-buttons">
                <a href="{projects_href}" class="btn btn-primary">View Projects</a>
                {cv_button}
            </div>
        </section>
        <section id="statistics" class="section statistics">
            <div class="stats-grid">{statistics}</div>
        </section>
{about}
        <section id="skills" class="section skills">
            <h2 class="section-title">Skills</h2>
            <div class="skills-accordion" id="skillsContainer">{skills}</div>
        </section>
        <section id="projects" class="section projects">
            <h2 class="section-title">Projects</h2>
            {controls}
            {grid}
        </section>
        <section id="achievements" class="section achievements">
            <h2 class="section-title">Achievements</h2>
            <div id="achievementsContainer">{achievements}</div>
        </section>
        <section id="contact" class="section contact">
            <h2 class="section-title">Get In Touch</h2>
            <div class="contact-info" id="contactInfoContainer">{contact_info}</div>
            {contact_form}
        </section>
{footer}
    </div>
    <div class="project-modal" id="projectModal" aria-hidden="true">
        <div class="modal-backdrop"></div>
        <div class="modal-content"><button class="modal-close" aria-label="Close">&times;</button><div class="modal-body"></div></div>
    </div>
    <script src="/static/script.js" defer></script>
</body>
</html>
"#,
        head = fragments.get("head"),
        navbar = fragments.or_else("navbar", || render_navbar(info)),
        hero_name = render_hero_name(portfolio),
        title = html_escape(&info.title),
        description = html_escape(&info.description),
        projects_href = Section::Projects.href(),
        cv_button = render_cv_button(portfolio),
        statistics = render_statistics(&portfolio.statistics),
        about = fragments.or_else("about", || render_about(info)),
        skills = render_skills(&portfolio.skills),
        controls = render_controls(&query),
        grid = render_grid(&result.entries),
        achievements = render_achievements(&portfolio.achievements),
        contact_info = render_contact_info(&portfolio.contact),
        contact_form = render_contact_form(),
        footer = fragments.or_else("footer", || render_footer(info, year)),
    )
}

pub fn render_navbar(info: &PersonalInfo) -> String {
    let links: String = Section::NAVIGABLE
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="{}" class="nav-link">{}</a></li>"#,
                s.href(),
                s.nav_label()
            )
        })
        .collect();

    format!(
        r#"        <nav class="navbar" id="navbar">
            <a href="{home}" class="nav-brand"><span class="brand-text">{name}'s Portfolio</span></a>
            <button class="hamburger" aria-label="Toggle menu"><span></span><span></span><span></span></button>
            <ul class="nav-menu">{links}</ul>
        </nav>
"#,
        home = Section::Home.href(),
        name = html_escape(&info.name),
    )
}

fn render_hero_name(portfolio: &Portfolio) -> String {
    let name = html_escape(&portfolio.personal_info.name);
    match portfolio
        .contact
        .facebook
        .as_deref()
        .filter(|f| !f.trim().is_empty())
    {
        Some(facebook) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="highlight highlight-link">{name}</a>"#,
            html_escape(&format_url(facebook, LinkKind::Facebook))
        ),
        None => format!(r#"<span class="highlight">{name}</span>"#),
    }
}

fn render_cv_button(portfolio: &Portfolio) -> String {
    match portfolio
        .contact
        .cv_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        Some(path) => format!(
            r#"<a href="{}" class="btn btn-secondary" download>Download CV</a>"#,
            html_escape(path)
        ),
        None => String::new(),
    }
}

pub fn render_about(info: &PersonalInfo) -> String {
    let image = match info.profile_image.as_deref() {
        Some(src) if !src.trim().is_empty() => format!(
            r#"<img src="{}" alt="{} - Profile Picture" id="heroProfileImage" class="profile-image">"#,
            html_escape(src),
            html_escape(&info.name)
        ),
        _ => String::new(),
    };

    format!(
        r#"        <section id="about" class="section about">
            <h2 class="section-title">About Me</h2>
            {image}
            <div class="about-details">
                <p><strong>University:</strong> {university}</p>
                <p><strong>Year:</strong> {year}</p>
                <p><strong>Location:</strong> {location}</p>
            </div>
        </section>
"#,
        university = html_escape(&info.university),
        year = html_escape(&info.year),
        location = html_escape(&info.location),
    )
}

pub fn render_footer(info: &PersonalInfo, year: i32) -> String {
    format!(
        r#"        <footer class="footer">
            <p>&copy; {year} <span id="footerName">{name}</span>. Made with <span class="footer-heart" role="button" aria-label="Send hearts">❤️</span></p>
        </footer>
"#,
        name = html_escape(&info.name),
    )
}
