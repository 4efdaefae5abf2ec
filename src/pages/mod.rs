//! Page handlers and response generation.
//!
//! A completed request is mapped to one of a fixed set of pages by exact
//! filename match; every page renders through the same context, so adding a
//! page means adding a variant and a match arm.

pub mod dynamic;
pub mod htdocs;
pub mod tasks;

use bytes::Bytes;

use crate::http::request::{QueryList, Request};
use crate::http::response::{ContentType, Response, StatusCode};
use crate::pages::tasks::{RuntimeTasks, TaskSource};

/// Everything a page may need while rendering.
pub struct RenderContext<'a> {
    pub query: &'a QueryList,
    pub tasks: &'a dyn TaskSource,
}

/// The pages this server can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Credits,
    Tasks,
    Stats,
    TestForm,
    SampleJson,
    NotFound,
}

impl Page {
    /// Maps a filename to its page handler.
    ///
    /// The match is exact, case-sensitive and length-aware; anything
    /// unknown falls back to [`Page::NotFound`].
    ///
    /// # Example
    ///
    /// ```
    /// # use dynhttp::pages::Page;
    /// assert_eq!(Page::lookup(""), Page::Index);
    /// assert_eq!(Page::lookup("index.htm"), Page::Index);
    /// assert_eq!(Page::lookup("index.html"), Page::NotFound);
    /// ```
    pub fn lookup(filename: &str) -> Self {
        match filename {
            "" | "index.htm" => Page::Index,
            "credits.htm" => Page::Credits,
            "tasks.htm" => Page::Tasks,
            "lwip.htm" => Page::Stats,
            "testform.htm" => Page::TestForm,
            "test.json" => Page::SampleJson,
            _ => Page::NotFound,
        }
    }

    /// Renders the page for the given context.
    pub fn render(&self, ctx: &RenderContext<'_>) -> Response {
        match self {
            Page::Index => Response::ok(ContentType::Html)
                .with_chunk(Bytes::from_static(htdocs::INDEX.as_bytes())),

            Page::Credits => Response::ok(ContentType::Html)
                .with_chunk(Bytes::from_static(htdocs::CREDITS.as_bytes())),

            Page::Tasks => Response::ok(ContentType::Html)
                .with_chunk(Bytes::from_static(htdocs::TASKS_BEGIN.as_bytes()))
                .with_chunk(Bytes::from(dynamic::task_report(ctx.tasks)))
                .with_chunk(Bytes::from_static(htdocs::TASKS_END.as_bytes())),

            // The dynamic statistics part is intentionally disabled; only
            // the static wrapper is served.
            Page::Stats => Response::ok(ContentType::Html)
                .with_chunk(Bytes::from_static(htdocs::STATS_BEGIN.as_bytes()))
                .with_chunk(Bytes::from_static(htdocs::STATS_END.as_bytes())),

            Page::TestForm => Response::ok(ContentType::Html)
                .with_chunk(Bytes::from_static(htdocs::TESTFORM_BEGIN.as_bytes()))
                .with_chunk(Bytes::from(dynamic::query_table(ctx.query)))
                .with_chunk(Bytes::from_static(htdocs::TESTFORM_END.as_bytes())),

            Page::SampleJson => Response::ok(ContentType::Json)
                .with_chunk(Bytes::from(dynamic::sample_json())),

            Page::NotFound => Response::new(StatusCode::NotFound, ContentType::Html)
                .with_chunk(Bytes::from_static(htdocs::ERR404.as_bytes())),
        }
    }
}

/// Turns completed requests into responses.
pub struct Responder {
    tasks: Box<dyn TaskSource>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Box::new(RuntimeTasks))
    }
}

impl Responder {
    pub fn new(tasks: Box<dyn TaskSource>) -> Self {
        Self { tasks }
    }

    /// Renders the page for a completed request.
    pub fn respond(&self, request: &Request) -> Response {
        let page = Page::lookup(request.filename());
        tracing::info!(filename = %request.filename(), page = ?page, "serving page");

        page.render(&RenderContext {
            query: request.query(),
            tasks: self.tasks.as_ref(),
        })
    }

    /// The fixed response for a malformed request line.
    pub fn bad_request(&self) -> Response {
        Response::new(StatusCode::BadRequest, ContentType::Plain)
            .with_chunk(Bytes::from_static(b"ERR\n"))
    }
}
