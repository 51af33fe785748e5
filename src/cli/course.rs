//! Course catalog command implementations

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, PaginationArgs};
use crate::client::pagination::{MAX_PAGE_SIZE, PaginationParams};
use crate::client::parallel::{MAX_PARALLEL_PAGE_FETCHES, gather_pages};
use crate::client::CatalogApi;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::{ChapterDisplay, CourseDisplay, SectionDisplay};
use crate::output;
use crate::output::json;

/// Run the course list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs, all: bool) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::COURSES).await?;

    let params = pagination.to_params();
    let first = ctx.client.list_courses(Some(&params)).await?;

    let remaining = if all && pagination.page.is_none() {
        first.remaining_pages()
    } else {
        Vec::new()
    };

    let mut courses = first.items;

    if !remaining.is_empty() {
        let client = ctx.client.clone();
        let page_size = params.page_size.unwrap_or(MAX_PAGE_SIZE);
        let more = gather_pages(
            remaining,
            move |page| {
                let client = client.clone();
                let params = PaginationParams::new().page_size(page_size).page(page);
                async move { client.list_courses(Some(&params)).await.map(|p| p.items) }
            },
            MAX_PARALLEL_PAGE_FETCHES,
        )
        .await?;
        courses.extend(more);
    }

    if let Some(limit) = pagination.limit {
        courses.truncate(limit);
    }

    // Resolve category and tag names through the reference-data cache
    ctx.ensure_categories().await?;
    ctx.ensure_tags().await?;

    let rows: Vec<CourseDisplay> = courses
        .into_iter()
        .map(|course| {
            let category = course
                .category_id
                .and_then(|id| ctx.refdata.category_by_id(id))
                .map(|c| c.name)
                .unwrap_or_else(|| "-".to_string());

            let names: Vec<String> = ctx
                .refdata
                .tags_by_ids(&course.tag_ids)
                .into_iter()
                .flatten()
                .map(|t| t.name)
                .collect();
            let tags = if names.is_empty() {
                "-".to_string()
            } else {
                names.join(", ")
            };

            CourseDisplay::new(course, category, tags)
        })
        .collect();

    output::print_listing(&rows, ctx.format, ctx.compact())
}

/// Run the course get command
pub async fn get(opts: &GlobalOptions, course_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::COURSES).await?;

    let course = ctx.client.get_course(course_id).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", course.title.bold());
            println!();
            println!("  ID:       {}", course.id);
            if let Some(ref status) = course.status {
                println!("  Status:   {}", status);
            }
            if let Some(ref price) = course.price {
                println!("  Price:    {}", price);
            }
            if let Some(count) = course.chapter_count {
                println!("  Chapters: {}", count);
            }
            if let Some(ref created) = course.created_at {
                println!("  Created:  {}", created);
            }
        }
        OutputFormat::Json => println!("{}", json::format_json(&course)?),
    }

    Ok(())
}

/// Run the course chapters command
pub async fn chapters(opts: &GlobalOptions, course_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::COURSES).await?;

    let chapters = ctx.client.list_chapters(course_id).await?;
    let rows: Vec<ChapterDisplay> = chapters.into_iter().map(ChapterDisplay::from).collect();

    output::print_listing(&rows, ctx.format, ctx.compact())
}

/// Run the course sections command
pub async fn sections(opts: &GlobalOptions, chapter_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::CHAPTERS).await?;

    let sections = ctx.client.list_sections(chapter_id).await?;
    let rows: Vec<SectionDisplay> = sections.into_iter().map(SectionDisplay::from).collect();

    output::print_listing(&rows, ctx.format, ctx.compact())
}
