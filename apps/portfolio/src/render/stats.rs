use crate::models::portfolio::Statistic;
use crate::render::html_escape;

/// Statistics tiles. Numbers start at 0 and count up to `data-target` once on screen.
pub fn render_statistics(statistics: &[Statistic]) -> String {
    statistics
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            format!(
                r#"<div class="stat-card" data-stat="{index}">
    <div class="stat-icon">{icon}</div>
    <div class="stat-value"><span class="stat-number" data-target="{target}">0</span>{suffix}</div>
    <div class="stat-label">{label}</div>
</div>
"#,
                icon = html_escape(&stat.icon),
                target = stat.value,
                suffix = stat
                    .suffix
                    .as_deref()
                    .map(|s| format!(r#"<span class="stat-suffix">{}</span>"#, html_escape(s)))
                    .unwrap_or_default(),
                label = html_escape(&stat.label),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_start_at_zero_with_target() {
        let html = render_statistics(&[
            Statistic {
                icon: "🚀".to_string(),
                label: "Projects".to_string(),
                value: 15,
                suffix: Some("+".to_string()),
            },
            Statistic {
                label: "Awards".to_string(),
                value: 3,
                ..Default::default()
            },
        ]);
        assert!(html.contains(r#"data-target="15">0</span><span class="stat-suffix">+</span>"#));
        assert!(html.contains(r#"data-target="3">0</span></div>"#));
    }
}
