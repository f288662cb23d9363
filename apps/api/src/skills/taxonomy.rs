//! Skill taxonomy — the fixed category set plus the rule table shared by the
//! classifier and the category store normalizer.
//!
//! Downstream merge logic and the UI key on these category names, so the
//! names, the exact-token table and the heuristic precedence are a contract.

use serde::{Deserialize, Serialize};

/// One of the 14 built-in skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Languages")]
    Languages,
    #[serde(rename = "Frameworks/Libraries")]
    FrameworksLibraries,
    #[serde(rename = "Database")]
    Database,
    #[serde(rename = "Cloud")]
    Cloud,
    #[serde(rename = "Version Control Tools")]
    VersionControlTools,
    #[serde(rename = "IDEs")]
    Ides,
    #[serde(rename = "Web-Technologies")]
    WebTechnologies,
    #[serde(rename = "Web Server")]
    WebServer,
    #[serde(rename = "Methodologies")]
    Methodologies,
    #[serde(rename = "Operating Systems")]
    OperatingSystems,
    #[serde(rename = "Professional Skills")]
    ProfessionalSkills,
    #[serde(rename = "Testing")]
    Testing,
    #[serde(rename = "Build Tools")]
    BuildTools,
    #[serde(rename = "Other Tools")]
    OtherTools,
}

/// All built-in categories in display order.
pub const TAXONOMY: [Category; 14] = [
    Category::Languages,
    Category::FrameworksLibraries,
    Category::Database,
    Category::Cloud,
    Category::VersionControlTools,
    Category::Ides,
    Category::WebTechnologies,
    Category::WebServer,
    Category::Methodologies,
    Category::OperatingSystems,
    Category::ProfessionalSkills,
    Category::Testing,
    Category::BuildTools,
    Category::OtherTools,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Languages => "Languages",
            Category::FrameworksLibraries => "Frameworks/Libraries",
            Category::Database => "Database",
            Category::Cloud => "Cloud",
            Category::VersionControlTools => "Version Control Tools",
            Category::Ides => "IDEs",
            Category::WebTechnologies => "Web-Technologies",
            Category::WebServer => "Web Server",
            Category::Methodologies => "Methodologies",
            Category::OperatingSystems => "Operating Systems",
            Category::ProfessionalSkills => "Professional Skills",
            Category::Testing => "Testing",
            Category::BuildTools => "Build Tools",
            Category::OtherTools => "Other Tools",
        }
    }

    /// Resolves a category name case-insensitively against the built-in set.
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim();
        TAXONOMY
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pass 1: exact tokens (lower-case, unique across categories)
// ────────────────────────────────────────────────────────────────────────────

pub(crate) const EXACT_TOKENS: &[(Category, &[&str])] = &[
    (
        Category::Languages,
        &[
            "java", "python", "javascript", "typescript", "c", "c++", "c#", "go", "golang",
            "rust", "ruby", "php", "swift", "kotlin", "scala", "r", "perl", "matlab", "dart",
            "lua", "haskell", "elixir", "erlang", "clojure", "objective-c", "shell", "bash",
            "powershell", "groovy", "f#", "visual basic", "vb.net", "assembly", "fortran",
            "cobol", "solidity", "julia", "ocaml", "zsh",
        ],
    ),
    (
        Category::FrameworksLibraries,
        &[
            "react", "react.js", "reactjs", "react native", "angular", "angularjs", "vue",
            "vue.js", "vuejs", "svelte", "next.js", "nextjs", "nuxt", "nuxt.js", "django",
            "flask", "fastapi", "spring", "spring boot", "spring mvc", "express", "express.js",
            "expressjs", "node.js", "nodejs", "node", "rails", "ruby on rails", "laravel",
            "symfony", ".net", ".net core", "asp.net", "asp.net core", "jquery", "bootstrap",
            "tailwind", "tailwind css", "material ui", "redux", "tensorflow", "pytorch", "keras",
            "pandas", "numpy", "scikit-learn", "opencv", "hibernate", "flutter", "ionic",
            "electron", "entity framework", "gin", "actix", "tokio", "qt",
        ],
    ),
    (
        Category::Database,
        &[
            "mysql", "postgresql", "postgres", "mongodb", "mongo", "sqlite", "oracle", "redis",
            "cassandra", "dynamodb", "mariadb", "sql server", "microsoft sql server", "mssql",
            "ms sql", "elasticsearch", "couchdb", "neo4j", "firestore", "cockroachdb",
            "snowflake", "bigquery", "sql", "nosql", "pl/sql", "t-sql", "influxdb", "memcached",
            "hbase", "supabase", "db2", "teradata",
        ],
    ),
    (
        Category::Cloud,
        &[
            "aws", "amazon web services", "azure", "microsoft azure", "gcp", "google cloud",
            "google cloud platform", "heroku", "digitalocean", "firebase", "netlify", "vercel",
            "cloudflare", "ec2", "s3", "lambda", "aws lambda", "openshift", "docker",
            "kubernetes", "k8s", "terraform", "ansible", "cloudformation", "helm",
        ],
    ),
    (
        Category::VersionControlTools,
        &[
            "git", "github", "gitlab", "bitbucket", "svn", "subversion", "mercurial", "perforce",
            "tfs", "version control",
        ],
    ),
    (
        Category::Ides,
        &[
            "vs code", "vscode", "visual studio code", "visual studio", "intellij",
            "intellij idea", "eclipse", "pycharm", "webstorm", "xcode", "android studio",
            "netbeans", "sublime text", "atom", "vim", "neovim", "emacs", "jupyter",
            "jupyter notebook", "rider", "clion", "goland", "phpstorm", "spyder", "rstudio",
        ],
    ),
    (
        Category::WebTechnologies,
        &[
            "html", "html5", "css", "css3", "sass", "scss", "less", "rest", "rest api",
            "rest apis", "restful", "restful api", "restful apis", "graphql", "json", "xml",
            "ajax", "websocket", "websockets", "http", "https", "oauth", "oauth2", "jwt", "soap",
            "grpc", "dom", "pwa", "seo", "web services", "wordpress", "webassembly", "wasm",
        ],
    ),
    (
        Category::WebServer,
        &[
            "apache", "apache http server", "nginx", "iis", "tomcat", "apache tomcat", "jetty",
            "caddy", "lighttpd", "gunicorn", "uwsgi", "wildfly", "jboss", "weblogic",
            "websphere", "httpd", "web server", "web servers",
        ],
    ),
    (
        Category::Methodologies,
        &[
            "agile", "scrum", "kanban", "waterfall", "tdd", "bdd", "devops", "ci/cd", "lean",
            "extreme programming", "xp", "test driven development", "test-driven development",
            "behavior driven development", "pair programming", "sdlc", "oop",
            "object oriented programming", "microservices", "design patterns", "safe", "solid",
        ],
    ),
    (
        Category::OperatingSystems,
        &[
            "linux", "windows", "macos", "mac os", "os x", "unix", "ubuntu", "debian", "centos",
            "red hat", "rhel", "fedora", "android", "ios", "windows server", "arch linux",
            "freebsd", "kali linux",
        ],
    ),
    (
        Category::ProfessionalSkills,
        &[
            "communication", "leadership", "teamwork", "problem solving", "problem-solving",
            "critical thinking", "time management", "project management", "public speaking",
            "collaboration", "mentoring", "negotiation", "adaptability", "creativity",
            "attention to detail", "analytical skills", "presentation",
        ],
    ),
    (
        Category::Testing,
        &[
            "jest", "mocha", "chai", "jasmine", "junit", "testng", "pytest", "selenium",
            "cypress", "playwright", "puppeteer", "karma", "enzyme", "react testing library",
            "unit testing", "integration testing", "jmeter", "appium", "cucumber", "rspec",
            "mockito", "xunit", "nunit", "vitest",
        ],
    ),
    (
        Category::BuildTools,
        &[
            "maven", "gradle", "ant", "apache ant", "webpack", "vite", "babel", "gulp", "grunt",
            "npm", "yarn", "pnpm", "make", "cmake", "jenkins", "travis ci", "circleci",
            "github actions", "gitlab ci", "bazel", "msbuild", "rollup", "parcel", "esbuild",
            "cargo", "sbt",
        ],
    ),
    (
        Category::OtherTools,
        &[
            "jira", "confluence", "slack", "trello", "figma", "postman", "tableau", "power bi",
            "excel", "microsoft excel", "ms office", "microsoft office", "photoshop", "notion",
            "asana", "sap", "salesforce", "splunk", "grafana", "prometheus", "kibana", "kafka",
            "apache kafka", "rabbitmq", "airflow", "swagger",
        ],
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Pass 2: substring heuristics, broadest last
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub(crate) enum Pattern {
    Contains(&'static str),
    StartsWith(&'static str),
    EndsWith(&'static str),
}

impl Pattern {
    fn matches(&self, needle: &str) -> bool {
        match self {
            Pattern::Contains(p) => needle.contains(p),
            Pattern::StartsWith(p) => needle.starts_with(p),
            Pattern::EndsWith(p) => needle.ends_with(p),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HeuristicRule {
    pub category: Category,
    pub patterns: &'static [Pattern],
}

impl HeuristicRule {
    pub fn matches(&self, needle: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(needle))
    }
}

use Pattern::{Contains, EndsWith, StartsWith};

/// Tried in order after the exact-token pass. "contains 'server'" sits behind
/// Database and Cloud so "SQL Server 2019" and "Serverless" resolve first.
pub(crate) const HEURISTICS: &[HeuristicRule] = &[
    HeuristicRule {
        category: Category::VersionControlTools,
        patterns: &[Contains("version control"), StartsWith("git")],
    },
    HeuristicRule {
        category: Category::Database,
        patterns: &[Contains("sql"), Contains("database"), EndsWith("db")],
    },
    HeuristicRule {
        category: Category::Cloud,
        patterns: &[
            Contains("cloud"),
            Contains("serverless"),
            StartsWith("aws"),
            StartsWith("azure"),
            StartsWith("gcp"),
        ],
    },
    HeuristicRule {
        category: Category::Methodologies,
        patterns: &[
            Contains("agile"),
            Contains("scrum"),
            Contains("kanban"),
            Contains("driven development"),
            Contains("methodolog"),
            Contains("devops"),
        ],
    },
    HeuristicRule {
        category: Category::Testing,
        patterns: &[
            Contains("test"),
            Contains("selenium"),
            Contains("cypress"),
            Contains("qa"),
        ],
    },
    HeuristicRule {
        category: Category::BuildTools,
        patterns: &[
            Contains("build"),
            Contains("pipeline"),
            Contains("bundler"),
            Contains("ci/cd"),
        ],
    },
    HeuristicRule {
        category: Category::WebServer,
        patterns: &[Contains("web server"), Contains("server")],
    },
    HeuristicRule {
        category: Category::OperatingSystems,
        patterns: &[
            Contains("linux"),
            Contains("windows"),
            Contains("unix"),
            Contains("macos"),
            Contains("ubuntu"),
            EndsWith(" os"),
        ],
    },
    HeuristicRule {
        category: Category::Ides,
        patterns: &[
            Contains("studio"),
            Contains("intellij"),
            Contains("jetbrains"),
            Contains("editor"),
        ],
    },
    HeuristicRule {
        category: Category::FrameworksLibraries,
        patterns: &[
            EndsWith("js"),
            Contains("framework"),
            Contains("library"),
            Contains("libraries"),
            Contains(".net"),
        ],
    },
    HeuristicRule {
        category: Category::WebTechnologies,
        patterns: &[
            Contains("html"),
            Contains("css"),
            Contains("api"),
            Contains("http"),
            Contains("web"),
            Contains("restful"),
            Contains("json"),
            Contains("xml"),
        ],
    },
    HeuristicRule {
        category: Category::Languages,
        patterns: &[Contains("programming language"), EndsWith("script")],
    },
    HeuristicRule {
        category: Category::ProfessionalSkills,
        patterns: &[
            Contains("communication"),
            Contains("leadership"),
            Contains("management"),
            Contains("team"),
            Contains("problem solving"),
            Contains("problem-solving"),
            Contains("collaboration"),
            Contains("mentor"),
            Contains("presentation"),
            Contains("negotiation"),
            Contains("critical thinking"),
            Contains("public speaking"),
            Contains("interpersonal"),
            Contains("stakeholder"),
        ],
    },
];
