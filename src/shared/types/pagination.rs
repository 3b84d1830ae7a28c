//! Paging primitives shared by repositories and the HTTP layer.
//!
//! Page indexes are zero-based. A [`Page`] carries the total element count,
//! a [`Slice`] only knows whether more rows exist.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::errors::DomainError;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "Invalid sort direction '{}'",
                other
            ))),
        }
    }
}

/// A single sort criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }
}

/// Ordered list of sort criteria. Empty means unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(direction: Direction, properties: &[&str]) -> Self {
        Self {
            orders: properties
                .iter()
                .map(|p| Order {
                    property: (*p).to_string(),
                    direction,
                })
                .collect(),
        }
    }

    pub fn and(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Parse `property[,direction]` expressions, e.g. `username,desc`.
    ///
    /// A single expression may also list several properties sharing the
    /// trailing direction: `age,username,asc`.
    pub fn parse<'a>(expressions: impl IntoIterator<Item = &'a str>) -> Result<Self, DomainError> {
        let mut sort = Sort::unsorted();
        for expr in expressions {
            let parts: Vec<&str> = expr
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            let Some((last, rest)) = parts.split_last() else {
                continue;
            };

            let (properties, direction) = match last.parse::<Direction>() {
                Ok(direction) if !rest.is_empty() => (rest.to_vec(), direction),
                Ok(_) => {
                    return Err(DomainError::Validation(format!(
                        "Sort expression '{}' has no property",
                        expr
                    )))
                }
                Err(_) => (parts.clone(), Direction::Asc),
            };

            for property in properties {
                sort.orders.push(Order {
                    property: property.to_string(),
                    direction,
                });
            }
        }
        Ok(sort)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.orders.is_empty() {
            return write!(f, "UNSORTED");
        }
        let rendered: Vec<String> = self
            .orders
            .iter()
            .map(|o| format!("{}: {}", o.property, o.direction.as_str()))
            .collect();
        write!(f, "{}", rendered.join(", "))
    }
}

const MAX_ROW_BOUND: u64 = i64::MAX as u64;

/// Page request: zero-based page index, page size and sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
    sort: Sort,
}

impl PageRequest {
    pub fn of(page: u64, size: u64) -> Result<Self, DomainError> {
        Self::with_sort(page, size, Sort::unsorted())
    }

    /// Offsets and limits are bound as signed 64-bit integers, so both the
    /// size and the resulting offset must stay within `i64::MAX`.
    pub fn with_sort(page: u64, size: u64, sort: Sort) -> Result<Self, DomainError> {
        if size < 1 {
            return Err(DomainError::Validation(
                "Page size must not be less than one".into(),
            ));
        }
        if size >= MAX_ROW_BOUND {
            return Err(DomainError::Validation(format!(
                "Page size must be less than {}",
                MAX_ROW_BOUND
            )));
        }
        match page.checked_mul(size) {
            Some(offset) if offset <= MAX_ROW_BOUND => Ok(Self { page, size, sort }),
            _ => Err(DomainError::Validation(format!(
                "Page index {} is out of range for page size {}",
                page, size
            ))),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// One page of results plus the total count over all pages
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn number(&self) -> u64 {
        self.request.page
    }

    pub fn size(&self) -> u64 {
        self.request.size
    }

    pub fn sort(&self) -> &Sort {
        &self.request.sort
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.request.size)
    }

    pub fn is_first(&self) -> bool {
        self.request.page == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_next(&self) -> bool {
        self.request.page.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.request.page > 0
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert the content while keeping paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}

/// A window of results without a total count.
///
/// `has_next` is known because the query fetched one row more than `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<T> {
    content: Vec<T>,
    request: PageRequest,
    has_next: bool,
}

impl<T> Slice<T> {
    /// Build a slice from `size + 1` over-fetched rows.
    pub fn from_overfetch(mut rows: Vec<T>, request: PageRequest) -> Self {
        let size = request.size as usize;
        let has_next = rows.len() > size;
        rows.truncate(size);
        Self {
            content: rows,
            request,
            has_next,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn number(&self) -> u64 {
        self.request.page
    }

    pub fn size(&self) -> u64 {
        self.request.size
    }

    pub fn is_first(&self) -> bool {
        self.request.page == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_previous(&self) -> bool {
        self.request.page > 0
    }

    pub fn map<U, F>(self, f: F) -> Slice<U>
    where
        F: FnMut(T) -> U,
    {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            has_next: self.has_next,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
