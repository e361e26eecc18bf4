// src/render.rs
use chrono_tz::Tz;

use crate::dates::display_date;
use crate::models::ContentRecord;
use crate::out_models::{CategoryPage, FrontPage};

fn link(r: &ContentRecord) -> String {
    if r.slug.is_empty() {
        r.title.clone()
    } else {
        format!("[{}](/article/{})", r.title, r.slug)
    }
}

fn dated(r: &ContentRecord, tz: Tz) -> String {
    let d = display_date(&r.date, tz);
    if d.is_empty() {
        link(r)
    } else {
        format!("{} ({})", link(r), d)
    }
}

pub fn render_front_page_markdown(p: &FrontPage, tz: Tz) -> String {
    let mut md = String::new();
    md.push_str("# Front Page\n\n");

    if let Some(main) = &p.main {
        md.push_str("## Top Story\n");
        md.push_str(&format!("**{}** · {}\n", main.category, dated(main, tz)));
        if !main.excerpt.is_empty() {
            md.push_str(&format!("\n> {}\n", main.excerpt.trim()));
        }
        md.push('\n');
    }

    if !p.secondary.is_empty() {
        md.push_str("## Also Leading\n");
        for r in &p.secondary {
            md.push_str(&format!("- **{}** · {}\n", r.category, link(r)));
        }
        md.push('\n');
    }

    if !p.headlines.is_empty() {
        md.push_str("## Latest Headlines\n");
        for (i, r) in p.headlines.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, dated(r, tz)));
        }
        md.push('\n');
    }

    if !p.most_read.is_empty() {
        md.push_str("## Most Read\n");
        for r in &p.most_read {
            md.push_str(&format!("- {} · {}\n", r.category, dated(r, tz)));
        }
        md.push('\n');
    }

    if !p.rest.is_empty() {
        md.push_str("## More Stories\n");
        for r in &p.rest {
            md.push_str(&format!("- {}\n", link(r)));
        }
        md.push('\n');
    }

    md
}

pub fn render_category_markdown(page: &CategoryPage) -> String {
    let mut md = String::new();
    md.push_str("# By Category\n\n");
    for section in &page.sections {
        md.push_str(&format!("## {}\n", section.category));
        if section.records.is_empty() {
            md.push_str("_No stories yet._\n\n");
            continue;
        }
        if section.backfilled {
            md.push_str("_Showing recent stories from other categories._\n");
        }
        for r in &section.records {
            md.push_str(&format!("- {}\n", link(r)));
        }
        md.push('\n');
    }
    md
}
