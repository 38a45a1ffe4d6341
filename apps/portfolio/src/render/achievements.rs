use crate::interaction::slideshow::TRACK_COPIES;
use crate::models::portfolio::Achievement;
use crate::render::html_escape;

pub const NO_ACHIEVEMENTS_MESSAGE: &str = "No achievements to display.";

/// Slideshow track holding the achievement set `TRACK_COPIES` times for a seamless loop.
pub fn render_achievements(achievements: &[Achievement]) -> String {
    if achievements.is_empty() {
        return format!(r#"<p class="no-content">{NO_ACHIEVEMENTS_MESSAGE}</p>"#);
    }

    let one_set: String = achievements
        .iter()
        .enumerate()
        .map(|(index, a)| render_card(index, a))
        .collect();

    format!(
        r#"<div class="achievements-slideshow-wrapper"><div class="achievements-slideshow-track">{}</div></div>"#,
        one_set.repeat(TRACK_COPIES)
    )
}

fn render_card(index: usize, achievement: &Achievement) -> String {
    format!(
        r#"<div class="achievement-card" data-achievement="{index}">
    <div class="achievement-header"><div class="achievement-icon">{icon}</div><h3 class="achievement-title">{title}</h3></div>
    <p class="achievement-description">{description}</p>
    <span class="achievement-date"><span class="date-icon">📅</span><span class="date-text">{date}</span></span>
</div>
"#,
        icon = html_escape(&achievement.icon),
        title = html_escape(&achievement.title),
        description = html_escape(&achievement.description),
        date = html_escape(&achievement.date),
    )
}
