use serde::Serialize;

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> PaginatedResponse<T> {
    /// Slices `all` into one page; the offset is clamped to the number of items
    pub fn paginate(all: Vec<T>, limit: Option<usize>, offset: Option<usize>) -> Self {
        let total = all.len();

        let offset = offset.unwrap_or(0).min(total);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let end = offset.saturating_add(limit).min(total);

        let items = all
            .into_iter()
            .skip(offset)
            .take(end.saturating_sub(offset))
            .collect();

        PaginatedResponse {
            items,
            total,
            limit,
            offset,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}
