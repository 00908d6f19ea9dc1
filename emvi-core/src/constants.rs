//! Client-wide constants.

/// Client version.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default authentication service host.
pub const DEFAULT_AUTH_HOST: &str = "https://auth.emvi.com";

/// Default API service host.
pub const DEFAULT_API_HOST: &str = "https://api.emvi.com";

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Connect timeout applied to every HTTP connection, in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Grant type sent in the client credentials exchange.
pub const GRANT_TYPE: &str = "client_credentials";

/// Format used for date query parameters (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Custom request header names.
pub mod headers {
    /// Carries the organization subdomain.
    pub const ORGANIZATION: &str = "Organization";
    /// Carries the client id.
    pub const CLIENT: &str = "Client";
}

/// Endpoint paths relative to the auth or API host.
///
/// Paths containing `{id}` or `{name}` are templates for endpoints the
/// client does not expose yet.
pub mod endpoints {
    pub const AUTHENTICATION: &str = "/api/v1/auth/token";
    pub const SEARCH_ARTICLES: &str = "/api/v1/search/article";
    pub const SEARCH_LISTS: &str = "/api/v1/search/list";
    pub const SEARCH_TAGS: &str = "/api/v1/search/tag";
    pub const SEARCH_ALL: &str = "/api/v1/search";
    pub const ORGANIZATION: &str = "/api/v1/organization";
    /// Article by id; the id is appended as a path segment.
    pub const ARTICLE: &str = "/api/v1/article";
    pub const ARTICLE_HISTORY: &str = "/api/v1/article/{id}/history";
    pub const LANGUAGES: &str = "/api/v1/lang";
    pub const LANGUAGE: &str = "/api/v1/lang/{id}";
    pub const PINNED: &str = "/api/v1/pin";
    pub const LIST: &str = "/api/v1/articlelist/{id}";
    pub const LIST_ENTRIES: &str = "/api/v1/articlelist/{id}/entry";
    pub const TAG: &str = "/api/v1/tag/{name}";

    /// Endpoints that are known but not wired to a client operation.
    pub const RESERVED: &[&str] = &[
        SEARCH_LISTS,
        SEARCH_TAGS,
        SEARCH_ALL,
        ARTICLE_HISTORY,
        LANGUAGE,
        PINNED,
        LIST,
        LIST_ENTRIES,
        TAG,
    ];
}
