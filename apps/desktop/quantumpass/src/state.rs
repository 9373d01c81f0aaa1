use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{Mutex, RwLock, mpsc};

/// Commands that mutate application state.
///
/// All mutations go through the state actor so concurrent button presses
/// can never interleave a read-modify-write on the stored password.
#[derive(Debug, Clone)]
pub enum StateCommand {
    /// Store the most recently generated password (for the copy action).
    /// A stored password is only ever replaced by the next generation;
    /// there is no clear operation.
    SetPassword(String),
}

/// Application state: the last generated password.
///
/// The password lives here only until the next generation overwrites it;
/// nothing is ever persisted. Mutations are serialized through an actor
/// task, reads go through a shared RwLock.
#[derive(Clone)]
pub struct AppState {
    /// Channel to send state mutation commands to the actor
    command_tx: Arc<Mutex<Option<mpsc::Sender<StateCommand>>>>,

    /// Shared read-only access to the last password
    password: Arc<RwLock<Option<String>>>,

    /// Track if the actor has been spawned
    actor_init: Arc<Mutex<bool>>,
}

impl AppState {
    /// Create a new state manager.
    ///
    /// The actor is lazily spawned on first use within an async context.
    pub fn new() -> Self {
        Self {
            command_tx: Arc::new(Mutex::new(None)),
            password: Arc::new(RwLock::new(None)),
            actor_init: Arc::new(Mutex::new(false)),
        }
    }

    /// Send a state update command.
    ///
    /// Returns an error if the state actor has died (should never happen).
    pub async fn update(&self, cmd: StateCommand) -> Result<(), String> {
        self.ensure_actor().await;

        let tx_guard = self.command_tx.lock().await;
        let tx = tx_guard.as_ref().ok_or("Actor not initialized")?;
        tx.send(cmd)
            .await
            .map_err(|e| format!("State actor died: {}", e))
    }

    /// Get the last generated password, if any.
    pub async fn get_password(&self) -> Option<String> {
        self.password.read().await.clone()
    }

    /// Ensure the actor is spawned (called lazily from async context).
    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(16);
            let password_clone = Arc::clone(&self.password);

            // Store tx before spawning to avoid a race with early senders
            let mut tx_guard = self.command_tx.lock().await;
            *tx_guard = Some(tx);
            drop(tx_guard);

            tokio::spawn(state_actor(rx, password_clone));
            *init_guard = true;
            info!("State actor spawned");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The state actor task.
///
/// Owns the mutable state and processes commands sequentially.
async fn state_actor(
    mut command_rx: mpsc::Receiver<StateCommand>,
    password: Arc<RwLock<Option<String>>>,
) {
    info!("State actor started");

    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            StateCommand::SetPassword(new_password) => {
                let mut password_write = password.write().await;

                if password_write.is_some() {
                    info!("Replacing stored password with a new generation");
                } else {
                    info!("Storing generated password ({} chars)", new_password.len());
                }

                *password_write = Some(new_password);
            }
        }
    }

    warn!("State actor stopped - this should not happen during normal operation");
}
