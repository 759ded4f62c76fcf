//! Route table and resolution.
//!
//! # Invariants
//! - Matching ignores query strings, fragments, trailing slashes and ASCII
//!   case.
//! - `/admin` and every `/admin/...` path require an authenticated session;
//!   otherwise resolution redirects to `/admin-login`.
//! - `/admin-login` with an authenticated session redirects to `/admin`.
//! - Unknown public paths resolve to `NotFound`; unknown admin sub-paths
//!   resolve to `AdminPage::NotFound` inside the panel.

pub const ADMIN_LOGIN_PATH: &str = "/admin-login";
pub const ADMIN_HOME_PATH: &str = "/admin";

/// Public pages of the journal site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    AboutJournal,
    Archive,
    Indexing,
    Contact,
    Manuscript,
    Instructions,
    EditorialPolicy,
    EditorialBoard,
    EditorialBoardForm,
    LoginForm,
    SignupForm,
    PublicationEthics,
    PeerReviewPolicy,
    PlagiarismPolicy,
    OpenAccessPolicy,
    CopyrightPolicy,
    PrivacyPolicy,
    CallForPapers,
    PublicationCharges,
    CurrentIssue,
    Faq,
    AdminLogin,
}

const PUBLIC_ROUTES: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/about-journal", Page::AboutJournal),
    ("/archive", Page::Archive),
    ("/indexing", Page::Indexing),
    ("/contact", Page::Contact),
    ("/manuscript", Page::Manuscript),
    ("/instructions", Page::Instructions),
    ("/editorial-policy", Page::EditorialPolicy),
    ("/editorial-board", Page::EditorialBoard),
    ("/editorialboardform", Page::EditorialBoardForm),
    ("/loginform", Page::LoginForm),
    ("/signupform", Page::SignupForm),
    ("/publication-ethics", Page::PublicationEthics),
    ("/peer-review-policy", Page::PeerReviewPolicy),
    ("/plagiarism-policy", Page::PlagiarismPolicy),
    ("/open-access-policy", Page::OpenAccessPolicy),
    ("/copyright-policy", Page::CopyrightPolicy),
    ("/privacy-policy", Page::PrivacyPolicy),
    ("/call-for-papers", Page::CallForPapers),
    ("/publication-charges", Page::PublicationCharges),
    ("/current-issue", Page::CurrentIssue),
    ("/faq", Page::Faq),
];

impl Page {
    /// Every public page, in navigation order.
    pub const ALL: &'static [Page] = &[
        Page::Home,
        Page::AboutJournal,
        Page::Archive,
        Page::Indexing,
        Page::Contact,
        Page::Manuscript,
        Page::Instructions,
        Page::EditorialPolicy,
        Page::EditorialBoard,
        Page::EditorialBoardForm,
        Page::LoginForm,
        Page::SignupForm,
        Page::PublicationEthics,
        Page::PeerReviewPolicy,
        Page::PlagiarismPolicy,
        Page::OpenAccessPolicy,
        Page::CopyrightPolicy,
        Page::PrivacyPolicy,
        Page::CallForPapers,
        Page::PublicationCharges,
        Page::CurrentIssue,
        Page::Faq,
        Page::AdminLogin,
    ];

    /// Canonical path as linked from navigation.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AboutJournal => "/about-journal",
            Self::Archive => "/archive",
            Self::Indexing => "/indexing",
            Self::Contact => "/contact",
            Self::Manuscript => "/manuscript",
            Self::Instructions => "/instructions",
            Self::EditorialPolicy => "/editorial-policy",
            Self::EditorialBoard => "/editorial-board",
            Self::EditorialBoardForm => "/editorialboardform",
            Self::LoginForm => "/loginForm",
            Self::SignupForm => "/signupForm",
            Self::PublicationEthics => "/publication-ethics",
            Self::PeerReviewPolicy => "/peer-review-policy",
            Self::PlagiarismPolicy => "/plagiarism-policy",
            Self::OpenAccessPolicy => "/open-access-policy",
            Self::CopyrightPolicy => "/copyright-policy",
            Self::PrivacyPolicy => "/privacy-policy",
            Self::CallForPapers => "/call-for-papers",
            Self::PublicationCharges => "/publication-charges",
            Self::CurrentIssue => "/current-issue",
            Self::Faq => "/faq",
            Self::AdminLogin => ADMIN_LOGIN_PATH,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AboutJournal => "About the Journal",
            Self::Archive => "Archive",
            Self::Indexing => "Indexing & Abstracting",
            Self::Contact => "Contact Us",
            Self::Manuscript => "Submit Manuscript",
            Self::Instructions => "Instructions for Authors",
            Self::EditorialPolicy => "Editorial Policy",
            Self::EditorialBoard => "Editorial Board",
            Self::EditorialBoardForm => "Join the Editorial Board",
            Self::LoginForm => "Author Login",
            Self::SignupForm => "Author Registration",
            Self::PublicationEthics => "Publication Ethics",
            Self::PeerReviewPolicy => "Peer Review Policy",
            Self::PlagiarismPolicy => "Plagiarism Policy",
            Self::OpenAccessPolicy => "Open Access Policy",
            Self::CopyrightPolicy => "Copyright Policy",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::CallForPapers => "Call for Papers",
            Self::PublicationCharges => "Publication Charges",
            Self::CurrentIssue => "Current Issue",
            Self::Faq => "Frequently Asked Questions",
            Self::AdminLogin => "Admin Login",
        }
    }

    /// Whether the page renders inside the shared navigation/footer shell.
    pub fn with_shell(self) -> bool {
        !matches!(self, Self::AdminLogin)
    }

    /// Whether the page hosts a form.
    pub fn has_form(self) -> bool {
        matches!(
            self,
            Self::Contact
                | Self::Manuscript
                | Self::EditorialBoardForm
                | Self::LoginForm
                | Self::SignupForm
                | Self::AdminLogin
        )
    }
}

/// Admin panel sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminPage {
    Dashboard,
    Submissions,
    Reviewers,
    Issues,
    EditorialBoard,
    Messages,
    Settings,
    NotFound,
}

impl AdminPage {
    fn from_subpath(subpath: &str) -> Self {
        match subpath {
            "" | "dashboard" => Self::Dashboard,
            "submissions" => Self::Submissions,
            "reviewers" => Self::Reviewers,
            "issues" => Self::Issues,
            "editorial-board" => Self::EditorialBoard,
            "messages" => Self::Messages,
            "settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Submissions => "Manuscript Submissions",
            Self::Reviewers => "Reviewers",
            Self::Issues => "Issues",
            Self::EditorialBoard => "Editorial Board Applications",
            Self::Messages => "Contact Messages",
            Self::Settings => "Settings",
            Self::NotFound => "Page Not Found",
        }
    }
}

/// Outcome of resolving one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Public { page: Page, with_shell: bool },
    Admin(AdminPage),
    Redirect { to: &'static str },
    NotFound,
}

/// Resolves `path` for a visitor whose admin session is `authenticated`.
pub fn resolve(path: &str, authenticated: bool) -> RouteDecision {
    let normalized = normalize_path(path);

    if normalized == ADMIN_LOGIN_PATH {
        if authenticated {
            return RouteDecision::Redirect {
                to: ADMIN_HOME_PATH,
            };
        }
        return public(Page::AdminLogin);
    }

    if let Some(subpath) = admin_subpath(&normalized) {
        if !authenticated {
            return RouteDecision::Redirect {
                to: ADMIN_LOGIN_PATH,
            };
        }
        return RouteDecision::Admin(AdminPage::from_subpath(subpath));
    }

    PUBLIC_ROUTES
        .iter()
        .find(|(route, _)| *route == normalized)
        .map_or(RouteDecision::NotFound, |(_, page)| public(*page))
}

fn public(page: Page) -> RouteDecision {
    RouteDecision::Public {
        page,
        with_shell: page.with_shell(),
    }
}

fn admin_subpath(normalized: &str) -> Option<&str> {
    if normalized == ADMIN_HOME_PATH {
        return Some("");
    }
    normalized.strip_prefix("/admin/")
}

/// Lowercases and strips query, fragment and trailing slashes.
pub fn normalize_path(path: &str) -> String {
    let without_query = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = without_query.trim_end_matches('/');
    let lowered = trimmed.to_ascii_lowercase();

    if lowered.is_empty() {
        return "/".to_string();
    }
    if lowered.starts_with('/') {
        lowered
    } else {
        format!("/{lowered}")
    }
}
