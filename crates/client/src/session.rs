//! Synchronization session
//!
//! A session is a single task that owns everything mutable about one local
//! player: identity, lobby occupancy, the tracked match, its latest snapshot
//! and derived view, and the leaderboard. Callers drive it through a cloneable
//! [`SessionHandle`] and observe it through a bounded [`SessionEvent`]
//! channel.
//!
//! All network calls run as futures owned by the session loop; their results
//! are applied one at a time, gated by the scheduler's sequence fences.

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests;

use std::fmt;
use std::sync::Arc;

use eyre::Result as EyreResult;
use futures_util::future::BoxFuture;
use futures_util::stream::FuturesUnordered;
use futures_util::{FutureExt, StreamExt};
use rps_primitives::game::{MatchId, MatchSnapshot, Move};
use rps_primitives::identity::{Player, PlayerId};
use rps_primitives::leaderboard::Leaderboard;
use rps_primitives::lobby::LobbyState;
use serde::Serialize;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::authority::Authority;
use crate::config::{JoinMode, SyncConfig};
use crate::deriver::{derive, DerivedView};
use crate::errors::{DeriveError, SessionError};
use crate::events::SessionEvent;
use crate::scheduler::{Activity, PollingScheduler, Tick};

const COMMAND_CHANNEL_CAPACITY: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LobbyStage {
    /// Registered, free to join.
    Idle,
    Joining,
    /// Seated, waiting for an opponent.
    Joined,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStage {
    Polling,
    Finished,
    /// Derivation stopped because the local player holds neither seat.
    Halted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "state", content = "stage", rename_all = "kebab-case")]
pub enum SessionState {
    LoggedOut,
    Lobby(LobbyStage),
    Match(MatchStage),
}

impl SessionState {
    /// Whether a new game may be started from here.
    #[must_use]
    pub const fn is_resettable(&self) -> bool {
        matches!(
            *self,
            Self::Match(_) | Self::Lobby(LobbyStage::Joined)
        )
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match *self {
            Self::LoggedOut => "logged out",
            Self::Lobby(LobbyStage::Idle) => "idle in the lobby",
            Self::Lobby(LobbyStage::Joining) => "joining the lobby",
            Self::Lobby(LobbyStage::Joined) => "waiting in the lobby",
            Self::Match(MatchStage::Polling) => "in a match",
            Self::Match(MatchStage::Finished) => "the match is finished",
            Self::Match(MatchStage::Halted) => "the match is halted",
        })
    }
}

/// An explicit, caller-initiated session action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Register,
    JoinLobby,
    SubmitMove,
    NewGame,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match *self {
            Self::Register => "register",
            Self::JoinLobby => "join a lobby",
            Self::SubmitMove => "submit a move",
            Self::NewGame => "start a new game",
        })
    }
}

/// Point-in-time copy of the session's observable state.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub state: SessionState,
    pub player: Option<Player>,
    pub lobby: Option<LobbyState>,
    pub match_id: Option<MatchId>,
    pub snapshot: Option<MatchSnapshot>,
    pub view: Option<DerivedView>,
    pub leaderboard: Option<Leaderboard>,
}

type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

#[derive(Debug)]
enum Command {
    Register { player: Player, reply: Reply<()> },
    JoinLobby { reply: Reply<LobbyState> },
    SubmitMove { move_: Move, reply: Reply<()> },
    NewGame { reply: Reply<()> },
    RefreshLeaderboard { reply: oneshot::Sender<()> },
    Status { reply: oneshot::Sender<SessionStatus> },
    Dispose { reply: oneshot::Sender<()> },
}

enum Completion {
    Lobby {
        tick: Tick,
        result: EyreResult<LobbyState>,
    },
    Match {
        tick: Tick,
        match_id: MatchId,
        result: EyreResult<MatchSnapshot>,
    },
    Leaderboard {
        tick: Tick,
        result: EyreResult<Leaderboard>,
    },
    Registered {
        player: Player,
        result: EyreResult<()>,
        reply: Reply<()>,
    },
    Joined {
        result: EyreResult<LobbyState>,
        reply: Reply<LobbyState>,
    },
    MoveSubmitted {
        match_id: MatchId,
        round: u32,
        result: EyreResult<()>,
        reply: Reply<()>,
    },
}

/// Cloneable front of a running session.
///
/// Every method fails with [`SessionError::Disposed`] once the session task
/// has ended.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
}

impl SessionHandle {
    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, SessionError> {
        let (tx, rx) = oneshot::channel();

        self.commands
            .send(command(tx))
            .await
            .map_err(|_| SessionError::Disposed)?;

        rx.await.map_err(|_| SessionError::Disposed)
    }

    /// Registers the local identity with the authority.
    pub async fn register(&self, player: Player) -> Result<(), SessionError> {
        self.request(|reply| Command::Register { player, reply })
            .await?
    }

    /// Joins the configured lobby and starts polling for an opponent.
    pub async fn join_lobby(&self) -> Result<LobbyState, SessionError> {
        self.request(|reply| Command::JoinLobby { reply }).await?
    }

    /// Submits `move_` for the round in progress.
    ///
    /// Rejected without contacting the authority unless the current view
    /// awaits a local move.
    pub async fn submit_move(&self, move_: Move) -> Result<(), SessionError> {
        self.request(|reply| Command::SubmitMove { move_, reply })
            .await?
    }

    /// Forgets the current match and returns to the idle lobby.
    pub async fn new_game(&self) -> Result<(), SessionError> {
        self.request(|reply| Command::NewGame { reply }).await?
    }

    pub async fn refresh_leaderboard(&self) -> Result<(), SessionError> {
        self.request(|reply| Command::RefreshLeaderboard { reply })
            .await
    }

    pub async fn status(&self) -> Result<SessionStatus, SessionError> {
        self.request(|reply| Command::Status { reply }).await
    }

    /// Stops every activity and ends the session task.
    pub async fn dispose(&self) -> Result<(), SessionError> {
        self.request(|reply| Command::Dispose { reply }).await
    }
}

pub struct Session<A> {
    authority: Arc<A>,
    config: SyncConfig,

    player: Option<Player>,
    state: SessionState,
    lobby: Option<LobbyState>,
    match_id: Option<MatchId>,
    snapshot: Option<MatchSnapshot>,
    view: Option<DerivedView>,
    leaderboard: Option<Leaderboard>,
    busy: Option<Action>,
    /// Completed-round count at the time of the last accepted move; blocks
    /// another move until a snapshot shows that round closed.
    moved_in_round: Option<u32>,

    scheduler: PollingScheduler,
    pending: FuturesUnordered<BoxFuture<'static, Completion>>,
    events: mpsc::Sender<SessionEvent>,
}

impl<A> fmt::Debug for Session<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("player", &self.player)
            .field("state", &self.state)
            .field("match_id", &self.match_id)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl<A: Authority> Session<A> {
    /// Spawns a session on the current tokio runtime.
    ///
    /// Returns the handle used to drive it and the receiving end of its event
    /// channel. Dropping every handle ends the session just like
    /// [`SessionHandle::dispose`].
    pub fn spawn(
        authority: Arc<A>,
        config: SyncConfig,
    ) -> (SessionHandle, mpsc::Receiver<SessionEvent>) {
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (events_tx, events_rx) = mpsc::channel(config.event_channel_capacity.max(1));

        let session = Self {
            authority,
            config,
            player: None,
            state: SessionState::LoggedOut,
            lobby: None,
            match_id: None,
            snapshot: None,
            view: None,
            leaderboard: None,
            busy: None,
            moved_in_round: None,
            scheduler: PollingScheduler::new(),
            pending: FuturesUnordered::new(),
            events: events_tx,
        };

        drop(tokio::spawn(session.run(commands_rx)));

        (
            SessionHandle {
                commands: commands_tx,
            },
            events_rx,
        )
    }

    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        if let Some(period) = self.config.leaderboard_poll_interval {
            let _ignored = self.scheduler.start(Activity::Leaderboard, period);
        }

        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        debug!("All session handles dropped, shutting down");

                        break;
                    };

                    if !self.handle(command) {
                        break;
                    }
                }
                Some(tick) = self.scheduler.next_due() => self.dispatch(tick),
                Some(completion) = self.pending.next() => self.apply(completion),
            }
        }

        self.scheduler.stop_all();
    }

    /// Applies one command; returns `false` once the session should end.
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Register { player, reply } => self.register(player, reply),
            Command::JoinLobby { reply } => self.join_lobby(reply),
            Command::SubmitMove { move_, reply } => self.submit_move(move_, reply),
            Command::NewGame { reply } => {
                let _ignored = reply.send(self.new_game());
            }
            Command::RefreshLeaderboard { reply } => {
                if let Some(tick) = self.scheduler.issue_now(Activity::Leaderboard) {
                    self.dispatch(tick);
                }

                let _ignored = reply.send(());
            }
            Command::Status { reply } => {
                let _ignored = reply.send(self.status());
            }
            Command::Dispose { reply } => {
                info!("Disposing session");

                self.scheduler.stop_all();

                let _ignored = reply.send(());

                return false;
            }
        }

        true
    }

    fn register(&mut self, player: Player, reply: Reply<()>) {
        if let Err(err) = self.admit(Action::Register) {
            let _ignored = reply.send(Err(err));

            return;
        }

        debug!(player_id = %player.id, "Registering player");

        self.busy = Some(Action::Register);

        let authority = Arc::clone(&self.authority);

        self.pending.push(
            async move {
                let result = authority.register_player(&player).await;

                Completion::Registered {
                    player,
                    result,
                    reply,
                }
            }
            .boxed(),
        );
    }

    fn join_lobby(&mut self, reply: Reply<LobbyState>) {
        if let Err(err) = self.admit(Action::JoinLobby) {
            let _ignored = reply.send(Err(err));

            return;
        }

        let Some(player_id) = self.player_id().cloned() else {
            let _ignored = reply.send(Err(self.invalid(Action::JoinLobby)));

            return;
        };

        let lobby_id = self.config.lobby_id.clone();

        debug!(%lobby_id, %player_id, "Joining lobby");

        self.state = SessionState::Lobby(LobbyStage::Joining);

        let authority = Arc::clone(&self.authority);

        self.pending.push(
            async move {
                let result = authority.join_lobby(&lobby_id, &player_id).await;

                Completion::Joined { result, reply }
            }
            .boxed(),
        );
    }

    fn submit_move(&mut self, move_: Move, reply: Reply<()>) {
        if let Err(err) = self.admit(Action::SubmitMove) {
            let _ignored = reply.send(Err(err));

            return;
        }

        let Some(round) = self
            .view
            .as_ref()
            .filter(|view| view.can_move())
            .map(|view| view.completed_rounds)
        else {
            let _ignored = reply.send(Err(SessionError::NotYourTurn));

            return;
        };

        // the refresh after an accepted move may not have landed yet
        if self.moved_in_round == Some(round) {
            debug!(round, "Move already accepted for this round");

            let _ignored = reply.send(Err(SessionError::NotYourTurn));

            return;
        }

        let (Some(player_id), Some(match_id)) = (self.player_id().cloned(), self.match_id.clone())
        else {
            let _ignored = reply.send(Err(self.invalid(Action::SubmitMove)));

            return;
        };

        debug!(%match_id, %player_id, %move_, "Submitting move");

        self.busy = Some(Action::SubmitMove);

        let authority = Arc::clone(&self.authority);

        self.pending.push(
            async move {
                let result = authority.submit_move(&match_id, &player_id, move_).await;

                Completion::MoveSubmitted {
                    match_id,
                    round,
                    result,
                    reply,
                }
            }
            .boxed(),
        );
    }

    fn new_game(&mut self) -> Result<(), SessionError> {
        self.admit(Action::NewGame)?;

        let _ignored = self.scheduler.stop(Activity::Lobby);
        let _ignored = self.scheduler.stop(Activity::Match);

        let match_id = self.match_id.take();

        self.moved_in_round = None;
        self.lobby = None;
        self.snapshot = None;
        self.view = None;
        self.state = SessionState::Lobby(LobbyStage::Idle);

        info!(?match_id, "Session reset, ready to join again");

        self.emit(SessionEvent::Reset);

        Ok(())
    }

    /// Checks that `action` is allowed in the current state, before any
    /// request is made.
    fn admit(&self, action: Action) -> Result<(), SessionError> {
        let allowed = match action {
            Action::Register => self.state == SessionState::LoggedOut,
            Action::JoinLobby => self.state == SessionState::Lobby(LobbyStage::Idle),
            Action::SubmitMove => self.state == SessionState::Match(MatchStage::Polling),
            Action::NewGame => self.state.is_resettable(),
        };

        if !allowed {
            return Err(self.invalid(action));
        }

        match (action, self.busy) {
            (Action::Register | Action::SubmitMove, Some(pending)) => {
                Err(SessionError::Busy { action, pending })
            }
            _ => Ok(()),
        }
    }

    const fn invalid(&self, action: Action) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.state,
        }
    }

    fn player_id(&self) -> Option<&PlayerId> {
        self.player.as_ref().map(|player| &player.id)
    }

    fn status(&self) -> SessionStatus {
        SessionStatus {
            state: self.state,
            player: self.player.clone(),
            lobby: self.lobby.clone(),
            match_id: self.match_id.clone(),
            snapshot: self.snapshot.clone(),
            view: self.view.clone(),
            leaderboard: self.leaderboard.clone(),
        }
    }

    fn dispatch(&mut self, tick: Tick) {
        debug!(activity = %tick.activity, seq = tick.seq, "Fetching");

        let authority = Arc::clone(&self.authority);

        let fetch = match tick.activity {
            Activity::Lobby => {
                let lobby_id = self.config.lobby_id.clone();

                async move {
                    let result = authority.lobby_state(&lobby_id).await;

                    Completion::Lobby { tick, result }
                }
                .boxed()
            }
            Activity::Match => {
                let Some(match_id) = self.match_id.clone() else {
                    debug!(seq = tick.seq, "No match tracked, dropping tick");

                    let _ignored = self.scheduler.complete(tick);

                    return;
                };

                async move {
                    let result = authority.match_state(&match_id).await;

                    Completion::Match {
                        tick,
                        match_id,
                        result,
                    }
                }
                .boxed()
            }
            Activity::Leaderboard => async move {
                let result = authority.leaderboard().await;

                Completion::Leaderboard { tick, result }
            }
            .boxed(),
        };

        self.pending.push(fetch);
    }

    /// Marks `tick` complete, issuing any queued re-run, and reports whether
    /// its result may be applied.
    fn settle(&mut self, tick: Tick) -> bool {
        let (fresh, rerun) = self.scheduler.complete(tick);

        if let Some(rerun) = rerun {
            self.dispatch(rerun);
        }

        fresh
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Lobby { tick, result } => {
                if !self.settle(tick) {
                    return;
                }

                match result {
                    Ok(lobby) => self.on_lobby(lobby),
                    Err(err) => warn!(%err, seq = tick.seq, "Lobby poll failed, retrying on next tick"),
                }
            }
            Completion::Match {
                tick,
                match_id,
                result,
            } => {
                if !self.settle(tick) {
                    return;
                }

                match result {
                    Ok(snapshot) => self.on_snapshot(&match_id, snapshot),
                    Err(err) => {
                        warn!(%match_id, %err, seq = tick.seq, "Match poll failed, retrying on next tick");
                    }
                }
            }
            Completion::Leaderboard { tick, result } => {
                if !self.settle(tick) {
                    return;
                }

                match result {
                    Ok(leaderboard) => self.on_leaderboard(leaderboard),
                    Err(err) => warn!(%err, seq = tick.seq, "Leaderboard poll failed, retrying on next tick"),
                }
            }
            Completion::Registered {
                player,
                result,
                reply,
            } => {
                self.busy = None;

                let result = result.map(|()| self.on_registered(player));

                let _ignored = reply.send(result.map_err(SessionError::from));
            }
            Completion::Joined { result, reply } => {
                let result = match result {
                    Ok(lobby) => {
                        self.on_joined(lobby.clone());

                        Ok(lobby)
                    }
                    Err(err) => {
                        warn!(%err, "Join failed, lobby can be joined again");

                        self.state = SessionState::Lobby(LobbyStage::Idle);

                        Err(err.into())
                    }
                };

                let _ignored = reply.send(result);
            }
            Completion::MoveSubmitted {
                match_id,
                round,
                result,
                reply,
            } => {
                self.busy = None;

                if result.is_ok() && self.match_id.as_ref() == Some(&match_id) {
                    self.moved_in_round = Some(round);

                    if self.scheduler.is_running(Activity::Match) {
                        debug!(%match_id, round, "Move accepted, refreshing match");

                        if let Some(tick) = self.scheduler.issue_now(Activity::Match) {
                            self.dispatch(tick);
                        }
                    }
                }

                let _ignored = reply.send(result.map_err(SessionError::from));
            }
        }
    }

    fn on_registered(&mut self, player: Player) {
        info!(player_id = %player.id, name = %player.name, "Player registered");

        self.player = Some(player.clone());
        self.state = SessionState::Lobby(LobbyStage::Idle);

        self.emit(SessionEvent::Registered { player });
    }

    fn on_joined(&mut self, lobby: LobbyState) {
        info!(lobby_id = %self.config.lobby_id, match_id = ?lobby.game_id, "Joined lobby");

        self.state = SessionState::Lobby(LobbyStage::Joined);
        self.lobby = Some(lobby.clone());

        match (self.config.join_mode, lobby.game_id.clone()) {
            (JoinMode::Immediate, Some(match_id)) => {
                self.match_id = Some(match_id);

                let _ignored = self
                    .scheduler
                    .start(Activity::Match, self.config.match_poll_interval);
            }
            (JoinMode::Immediate, None) => {
                warn!("Join reply carries no match id, polling the lobby instead");

                let _ignored = self
                    .scheduler
                    .start(Activity::Lobby, self.config.lobby_poll_interval);
            }
            (JoinMode::LobbyPoll, _) => {
                let _ignored = self
                    .scheduler
                    .start(Activity::Lobby, self.config.lobby_poll_interval);
            }
        }

        self.emit(SessionEvent::Joined { lobby });
    }

    fn on_lobby(&mut self, lobby: LobbyState) {
        if self.state != SessionState::Lobby(LobbyStage::Joined) {
            debug!(state = %self.state, "Ignoring lobby state outside the lobby");

            return;
        }

        let Some(player_id) = self.player_id().cloned() else {
            return;
        };

        self.lobby = Some(lobby.clone());

        if !lobby.is_full() {
            debug!("Lobby not full yet");

            return;
        }

        if !lobby.contains(&player_id) {
            warn!(
                %player_id,
                player1_id = ?lobby.player1_id,
                player2_id = ?lobby.player2_id,
                "Full lobby does not seat the local player, still waiting"
            );

            return;
        }

        let Some(match_id) = lobby.game_id.clone() else {
            debug!("Lobby full but no match assigned yet");

            return;
        };

        let opponent_id = lobby.opponent_of(&player_id).cloned();

        self.match_id = Some(match_id.clone());

        let _ignored = self.scheduler.replace(
            Activity::Lobby,
            Activity::Match,
            self.config.match_poll_interval,
        );

        self.start_match(match_id, opponent_id);
    }

    fn start_match(&mut self, match_id: MatchId, opponent_id: Option<PlayerId>) {
        info!(%match_id, ?opponent_id, "Match started");

        self.state = SessionState::Match(MatchStage::Polling);

        self.emit(SessionEvent::MatchStarted {
            match_id,
            opponent_id,
        });
    }

    fn on_snapshot(&mut self, match_id: &MatchId, snapshot: MatchSnapshot) {
        if self.match_id.as_ref() != Some(match_id) {
            debug!(%match_id, "Snapshot for a match no longer tracked");

            return;
        }

        if !matches!(
            self.state,
            SessionState::Lobby(LobbyStage::Joined) | SessionState::Match(MatchStage::Polling)
        ) {
            debug!(%match_id, state = %self.state, "Ignoring snapshot");

            return;
        }

        let Some(player_id) = self.player_id().cloned() else {
            return;
        };

        let view = match derive(&player_id, &snapshot) {
            Ok(view) => view,
            Err(err @ DeriveError::IdentityMismatch { .. }) => {
                error!(%match_id, %err, "Local player is not part of the match, halting");

                let _ignored = self.scheduler.stop(Activity::Match);

                self.state = SessionState::Match(MatchStage::Halted);

                self.emit(SessionEvent::ViewRejected { error: err });

                return;
            }
            Err(err @ DeriveError::InconsistentCounters { .. }) => {
                warn!(%match_id, %err, "Discarding inconsistent snapshot");

                self.emit(SessionEvent::ViewRejected { error: err });

                return;
            }
        };

        if self
            .moved_in_round
            .is_some_and(|round| view.completed_rounds > round)
        {
            self.moved_in_round = None;
        }

        if self.state == SessionState::Lobby(LobbyStage::Joined)
            && snapshot.second_player_id.is_some()
        {
            let _ignored = self.scheduler.stop(Activity::Lobby);

            self.start_match(match_id.clone(), view.opponent_id.clone());
        }

        self.snapshot = Some(snapshot);

        if self.view.as_ref() != Some(&view) {
            let previous_rounds = self.view.as_ref().map(|view| view.completed_rounds);

            if previous_rounds.is_some_and(|rounds| view.completed_rounds > rounds) {
                info!(%match_id, completed_rounds = view.completed_rounds, "Round completed");

                self.emit(SessionEvent::RoundAdvanced {
                    completed_rounds: view.completed_rounds,
                });
            }

            debug!(%match_id, phase = ?view.phase, "View changed");

            self.emit(SessionEvent::ViewChanged { view: view.clone() });
        }

        if view.phase.is_finished() && self.state != SessionState::Match(MatchStage::Finished) {
            info!(%match_id, local_won = view.local_won, "Match finished");

            let _ignored = self.scheduler.stop(Activity::Match);

            self.state = SessionState::Match(MatchStage::Finished);

            self.emit(SessionEvent::MatchFinished { view: view.clone() });

            if let Some(tick) = self.scheduler.issue_now(Activity::Leaderboard) {
                self.dispatch(tick);
            }
        }

        self.view = Some(view);
    }

    fn on_leaderboard(&mut self, leaderboard: Leaderboard) {
        if self.leaderboard.as_ref() == Some(&leaderboard) {
            return;
        }

        debug!(players = leaderboard.players.len(), "Leaderboard updated");

        self.leaderboard = Some(leaderboard.clone());

        self.emit(SessionEvent::LeaderboardUpdated { leaderboard });
    }

    fn emit(&self, event: SessionEvent) {
        match self.events.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(?event, "Event channel full, dropping event");
            }
            Err(TrySendError::Closed(_)) => {
                debug!("No event listener left");
            }
        }
    }
}
