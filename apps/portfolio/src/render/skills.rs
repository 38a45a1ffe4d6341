use crate::models::portfolio::SkillCategory;
use crate::render::html_escape;

/// Skills accordion. Every category starts collapsed.
pub fn render_skills(skills: &[SkillCategory]) -> String {
    skills
        .iter()
        .enumerate()
        .map(|(index, category)| render_category(index, category))
        .collect()
}

fn render_category(index: usize, category: &SkillCategory) -> String {
    let items: String = category
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="skill-item"><span class="skill-name">{}</span><div class="skill-badge"></div></div>"#,
                html_escape(item)
            )
        })
        .collect();

    format!(
        r#"<div class="accordion-item skill-category" data-category="{index}">
    <button class="accordion-header" aria-expanded="false">
        <div class="category-header-content">
            <div class="category-icon">{icon}</div>
            <h3 class="category-title">{title}</h3>
        </div>
        <span class="accordion-icon">▼</span>
    </button>
    <div class="accordion-content"><div class="accordion-body"><div class="skill-items">{items}</div></div></div>
</div>
"#,
        icon = html_escape(category.icon_or_default()),
        title = html_escape(&category.category),
    )
}
