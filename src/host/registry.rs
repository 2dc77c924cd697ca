//! Server definitions and the registry that receives them.

use std::time::Duration;

use serde::Serialize;

/// A language server the host can launch over stdio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerDefinition {
    /// Fixed server identifier (e.g. `prisma`).
    pub id: String,
    /// Launch argument vector, program first.
    pub command: Vec<String>,
    /// How long the host waits for the initialize handshake.
    #[serde(rename = "init_timeout_ms", serialize_with = "as_millis")]
    pub init_timeout: Duration,
}

fn as_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// The language-client side that owns spawning and JSON-RPC once a server
/// is registered.
pub trait LanguageClientHost {
    /// Override the initialize handshake timeout.
    fn set_init_timeout(&mut self, timeout: Duration);

    /// Register a launchable server.
    fn add_server_definition(&mut self, definition: ServerDefinition);
}

/// Default handshake timeout when none is configured.
pub const DEFAULT_INIT_TIMEOUT: Duration = Duration::from_secs(10);

/// In-memory host that keeps registered definitions.
///
/// Definitions added after a timeout override pick it up; registering the
/// same id twice replaces the earlier definition.
#[derive(Debug, Clone)]
pub struct ServerRegistry {
    init_timeout: Duration,
    definitions: Vec<ServerDefinition>,
}

impl Default for ServerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerRegistry {
    pub fn new() -> Self {
        Self {
            init_timeout: DEFAULT_INIT_TIMEOUT,
            definitions: Vec::new(),
        }
    }

    /// Current handshake timeout.
    pub fn init_timeout(&self) -> Duration {
        self.init_timeout
    }

    /// All registered definitions.
    pub fn definitions(&self) -> &[ServerDefinition] {
        &self.definitions
    }

    /// Look up a definition by id.
    pub fn get(&self, id: &str) -> Option<&ServerDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }
}

impl LanguageClientHost for ServerRegistry {
    fn set_init_timeout(&mut self, timeout: Duration) {
        self.init_timeout = timeout;
    }

    fn add_server_definition(&mut self, mut definition: ServerDefinition) {
        definition.init_timeout = self.init_timeout;
        self.definitions.retain(|d| d.id != definition.id);
        self.definitions.push(definition);
    }
}
