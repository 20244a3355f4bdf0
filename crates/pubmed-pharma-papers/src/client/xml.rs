//! Streaming parsers for E-utilities XML (esearch id lists, efetch articles).
//!
//! The efetch parser walks the document once with an element stack and
//! captures the text of the few elements a [`Paper`] needs. Text inside a
//! captured element is accumulated across inline markup (`<i>`, `<sub>`)
//! and whitespace-collapsed when the element closes.

use chrono::NaiveDate;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{ClientError, ClientResult};
use crate::models::{Author, Paper};

/// Date used when an article carries no usable date element.
pub const DEFAULT_DATE: &str = "1900-01-01";

/// Title used when an article has no `ArticleTitle`.
pub const DEFAULT_TITLE: &str = "No title";

const DEFAULT_YEAR: &str = "1900";

const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// Extract PubMed IDs from an esearch response.
pub fn parse_search_ids(xml: &str) -> ClientResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event().map_err(ClientError::xml)? {
            Event::Start(e) => stack.push(element_name(e.name().as_ref())),
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(e) => {
                if path_ends_with(&stack, &["IdList", "Id"]) {
                    let text = e.unescape().map_err(ClientError::xml)?;
                    let id = text.trim();
                    if !id.is_empty() {
                        ids.push(id.to_string());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    ensure_closed(&stack)?;
    Ok(ids)
}

/// Parse every `PubmedArticle` in an efetch response.
///
/// Articles without a PMID are skipped.
pub fn parse_articles(xml: &str) -> ClientResult<Vec<Paper>> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut papers = Vec::new();
    let mut article: Option<ArticleState> = None;
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event().map_err(ClientError::xml)? {
            Event::Start(e) => {
                let name = element_name(e.name().as_ref());
                if name == "PubmedArticle" {
                    article = Some(ArticleState::default());
                } else if let Some(state) = article.as_mut() {
                    if capture.is_none() {
                        let parent = stack.last().map_or("", String::as_str);
                        if let Some(field) = state.open(&name, parent) {
                            capture = Some(Capture::new(field, stack.len() + 1));
                        }
                    }
                }
                stack.push(name);
            }
            Event::End(_) => {
                let depth = stack.len();
                let name = stack.pop().unwrap_or_default();

                if capture.as_ref().is_some_and(|c| c.depth == depth) {
                    if let (Some(c), Some(state)) = (capture.take(), article.as_mut()) {
                        state.store(c.field, collapse_whitespace(&c.text));
                    }
                }

                if name == "PubmedArticle" {
                    match article.take().map(ArticleState::finish) {
                        Some(Some(paper)) => papers.push(paper),
                        Some(None) => tracing::debug!("Skipping article without PMID"),
                        None => {}
                    }
                } else if let Some(state) = article.as_mut() {
                    state.close(&name);
                }
            }
            Event::Text(e) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&e.unescape().map_err(ClientError::xml)?);
                }
            }
            Event::CData(e) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    ensure_closed(&stack)?;
    Ok(papers)
}

/// Field whose text is being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pmid,
    Title,
    Abstract,
    Year,
    Month,
    Day,
    LastName,
    ForeName,
    Affiliation,
}

#[derive(Debug)]
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

impl Capture {
    const fn new(field: Field, depth: usize) -> Self {
        Self { field, depth, text: String::new() }
    }
}

/// Date elements in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateKind {
    PubDate,
    ArticleDate,
    DateCompleted,
}

impl DateKind {
    fn from_element(name: &str) -> Option<Self> {
        match name {
            "PubDate" => Some(Self::PubDate),
            "ArticleDate" => Some(Self::ArticleDate),
            "DateCompleted" => Some(Self::DateCompleted),
            _ => None,
        }
    }

    const fn element(self) -> &'static str {
        match self {
            Self::PubDate => "PubDate",
            Self::ArticleDate => "ArticleDate",
            Self::DateCompleted => "DateCompleted",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PartialDate {
    year: Option<String>,
    month: Option<String>,
    day: Option<String>,
}

impl PartialDate {
    /// Render as `YYYY-MM-DD`, defaulting missing parts.
    fn to_iso(&self) -> String {
        let year = self.year.as_deref().filter(|y| !y.is_empty()).unwrap_or(DEFAULT_YEAR);
        let month = self.month.as_deref().map_or("01", normalize_month);
        let day = self.day.as_deref().filter(|d| !d.is_empty()).unwrap_or("01");

        let iso = format!("{year}-{month:0>2}-{day:0>2}");
        if NaiveDate::parse_from_str(&iso, "%Y-%m-%d").is_ok() {
            iso
        } else if year.parse::<i32>().is_ok() {
            format!("{year}-01-01")
        } else {
            DEFAULT_DATE.to_string()
        }
    }
}

#[derive(Debug, Default)]
struct AuthorState {
    last_name: Option<String>,
    fore_name: Option<String>,
    affiliation: Option<String>,
}

impl AuthorState {
    fn finish(self) -> Option<Author> {
        let last_name = self.last_name.filter(|n| !n.is_empty())?;
        let fore_name = self.fore_name.unwrap_or_default();
        let name = format!("{fore_name} {last_name}").trim().to_string();
        Some(Author::new(name, self.affiliation.unwrap_or_default()))
    }
}

#[derive(Debug, Default)]
struct ArticleState {
    pmid: Option<String>,
    title: Option<String>,
    abstract_text: Option<String>,
    dates: [Option<PartialDate>; 3],
    open_date: Option<(DateKind, PartialDate)>,
    authors: Vec<Author>,
    author: Option<AuthorState>,
    in_author_list: bool,
    author_list_done: bool,
}

impl ArticleState {
    /// Handle an opening tag; returns the field to capture, if any.
    fn open(&mut self, name: &str, parent: &str) -> Option<Field> {
        match name {
            "PMID" if self.pmid.is_none() => Some(Field::Pmid),
            "ArticleTitle" if self.title.is_none() => Some(Field::Title),
            "AbstractText" if parent == "Abstract" && self.abstract_text.is_none() => {
                Some(Field::Abstract)
            }
            "PubDate" | "ArticleDate" | "DateCompleted" => {
                if let Some(kind) = DateKind::from_element(name) {
                    if self.open_date.is_none() && self.dates[kind.index()].is_none() {
                        self.open_date = Some((kind, PartialDate::default()));
                    }
                }
                None
            }
            "Year" | "Month" | "Day"
                if self.open_date.as_ref().is_some_and(|(kind, _)| kind.element() == parent) =>
            {
                match name {
                    "Year" => Some(Field::Year),
                    "Month" => Some(Field::Month),
                    _ => Some(Field::Day),
                }
            }
            "AuthorList" if !self.author_list_done => {
                self.in_author_list = true;
                None
            }
            "Author" if self.in_author_list && parent == "AuthorList" => {
                self.author = Some(AuthorState::default());
                None
            }
            "LastName" if parent == "Author" && self.author.is_some() => Some(Field::LastName),
            "ForeName" if parent == "Author" && self.author.is_some() => Some(Field::ForeName),
            "Affiliation" if self.author.as_ref().is_some_and(|a| a.affiliation.is_none()) => {
                Some(Field::Affiliation)
            }
            _ => None,
        }
    }

    /// Store captured text.
    fn store(&mut self, field: Field, text: String) {
        match field {
            Field::Pmid => {
                if !text.is_empty() {
                    self.pmid = Some(text);
                }
            }
            Field::Title => self.title = Some(text),
            Field::Abstract => self.abstract_text = Some(text),
            Field::Year | Field::Month | Field::Day => {
                if let Some((_, date)) = self.open_date.as_mut() {
                    let slot = match field {
                        Field::Year => &mut date.year,
                        Field::Month => &mut date.month,
                        _ => &mut date.day,
                    };
                    *slot = Some(text);
                }
            }
            Field::LastName | Field::ForeName | Field::Affiliation => {
                if let Some(author) = self.author.as_mut() {
                    let slot = match field {
                        Field::LastName => &mut author.last_name,
                        Field::ForeName => &mut author.fore_name,
                        _ => &mut author.affiliation,
                    };
                    *slot = Some(text);
                }
            }
        }
    }

    /// Handle a closing tag.
    fn close(&mut self, name: &str) {
        match name {
            "PubDate" | "ArticleDate" | "DateCompleted" => {
                if self.open_date.as_ref().is_some_and(|(kind, _)| kind.element() == name) {
                    if let Some((kind, date)) = self.open_date.take() {
                        self.dates[kind.index()] = Some(date);
                    }
                }
            }
            "Author" => {
                if let Some(author) = self.author.take().and_then(AuthorState::finish) {
                    self.authors.push(author);
                }
            }
            "AuthorList" if self.in_author_list => {
                self.in_author_list = false;
                self.author_list_done = true;
            }
            _ => {}
        }
    }

    fn finish(self) -> Option<Paper> {
        let pubmed_id = self.pmid?;
        let title = self.title.filter(|t| !t.is_empty()).unwrap_or_else(|| DEFAULT_TITLE.into());
        let publication_date = self
            .dates
            .iter()
            .flatten()
            .next()
            .map_or_else(|| DEFAULT_DATE.to_string(), PartialDate::to_iso);

        Some(Paper {
            pubmed_id,
            title,
            publication_date,
            authors: self.authors,
            r#abstract: self.abstract_text.unwrap_or_default(),
        })
    }
}

/// Map a PubMed month ("Mar", "3", "03") to two digits; unknown values become "01".
fn normalize_month(month: &str) -> &str {
    if let Some((_, number)) = MONTHS.iter().find(|(name, _)| *name == month) {
        return number;
    }
    if !month.is_empty() && month.chars().all(|c| c.is_ascii_digit()) {
        return month;
    }
    "01"
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn path_ends_with(stack: &[String], path: &[&str]) -> bool {
    stack.len() >= path.len()
        && stack[stack.len() - path.len()..].iter().zip(path).all(|(a, b)| a == b)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn ensure_closed(stack: &[String]) -> ClientResult<()> {
    match stack.last() {
        Some(open) => Err(ClientError::xml(format!("unexpected end of document inside <{open}>"))),
        None => Ok(()),
    }
}
