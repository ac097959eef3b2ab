//! UseCase: セッション管理
//!
//! ## 責務
//!
//! - 参加者の受付（定員 2 人、超過した接続は理由を通知して切断）
//! - 参加者 ID とプレイヤー席の対応付け（再接続時は同じ席に戻す）
//! - セッションの構成、手の適用、勝敗・引き分けの通知
//!
//! ## 並行性
//!
//! `SessionManager` は `&mut self` を取る操作で状態を変更します。
//! 呼び出し側（UI 層）が `Mutex` で包むことで、各イベントは前のイベントの処理が
//! 完了してから順番に処理されます。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - admit / configure / submit_move / release の各操作と、配信されるイベント
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 人の受付、構成、対局、勝利と引き分け
//! - 異常系：定員超過、重複 ID、構成権限なし、不正な構成、手番外・使用済みセル
//! - エッジケース：切断後の再接続、構成前の構成者の切断

use std::sync::Arc;

use kinrow_shared::time::Clock;

use crate::domain::{
    ConfigError, ConnectionId, Coordinate, GameConfig, GameEvent, GameSession, MoveOutcome,
    MoveRejection, ParticipantId, PlayerPair, PusherChannel, Seat, SessionSnapshot, SessionStatus,
    Symbol, SyncChannel, initial_players,
};

use super::error::{AdmissionError, ConfigureError};

/// SessionManager の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerSettings {
    /// 構成で受け付ける盤面サイズの上限
    pub max_board_size: usize,
}

impl ManagerSettings {
    pub const DEFAULT_MAX_BOARD_SIZE: usize = 100;
    /// `max_board_size` に指定できる最大値（クライアントの盤面描画もこの大きさまで）
    pub const MAX_BOARD_SIZE_LIMIT: usize = 1000;
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            max_board_size: Self::DEFAULT_MAX_BOARD_SIZE,
        }
    }
}

/// 受付に成功した参加者の情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub seat: Seat,
    pub symbol: Symbol,
    /// 同じ参加者 ID が以前に使っていた席に戻った場合 true
    pub resumed: bool,
}

/// 席に割り当てられたコネクション
#[derive(Debug, Clone)]
struct SeatBinding {
    connection: ConnectionId,
    participant: ParticipantId,
}

/// 2 人用セッションのマネージャー
pub struct SessionManager {
    /// SyncChannel（イベント配信の抽象化）
    channel: Arc<dyn SyncChannel>,
    /// セッション開始時刻の取得に使う Clock
    clock: Arc<dyn Clock>,
    settings: ManagerSettings,
    players: PlayerPair,
    /// 席ごとの現在のコネクション
    bindings: [Option<SeatBinding>; 2],
    /// 席ごとに最後に座っていた参加者 ID
    previous_participants: [Option<ParticipantId>; 2],
    /// 受付順の接続中コネクション（先頭が構成者）
    admission_order: Vec<ConnectionId>,
    /// configureRequested を送ったコネクション
    prompted: Option<ConnectionId>,
    session: Option<GameSession>,
}

impl SessionManager {
    /// 新しい SessionManager を作成
    pub fn new(
        channel: Arc<dyn SyncChannel>,
        clock: Arc<dyn Clock>,
        settings: ManagerSettings,
    ) -> Self {
        Self {
            channel,
            clock,
            settings,
            players: initial_players(),
            bindings: [None, None],
            previous_participants: [None, None],
            admission_order: Vec::new(),
            prompted: None,
            session: None,
        }
    }

    /// 参加者の受付を実行
    ///
    /// コネクションを SyncChannel に登録した上で席を割り当てます。
    /// 受付できない場合は `rejected` を送信してから切断します。
    ///
    /// # Arguments
    ///
    /// * `connection` - トランスポートのコネクション ID
    /// * `participant` - クライアントが指定した参加者 ID
    /// * `sender` - コネクションへの送信チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(Admission)` - 受付成功（割り当てられた席と記号）
    /// * `Err(AdmissionError)` - 定員超過、または参加者 ID の重複
    pub async fn admit(
        &mut self,
        connection: ConnectionId,
        participant: ParticipantId,
        sender: PusherChannel,
    ) -> Result<Admission, AdmissionError> {
        self.channel.register(connection, sender).await;

        let seat = match self.choose_seat(&participant) {
            Ok(seat) => seat,
            Err(error) => {
                tracing::warn!(
                    "Rejecting connection '{}' of participant '{}': {}",
                    connection,
                    participant,
                    error
                );
                let reason = error.to_string();
                self.notify(
                    &connection,
                    &GameEvent::Rejected {
                        reason: reason.clone(),
                    },
                )
                .await;
                self.channel.disconnect(&connection, &reason).await;
                return Err(error);
            }
        };

        let index = seat.index();
        let symbol = seat.symbol();
        let resumed = self.last_held_by(seat, &participant);
        if let Some(previous) = self.previous_participants[index].as_ref()
            && !resumed
        {
            tracing::warn!(
                "Seat '{}' passes from participant '{}' to '{}'",
                symbol,
                previous,
                participant
            );
        }

        self.bindings[index] = Some(SeatBinding {
            connection,
            participant: participant.clone(),
        });
        self.previous_participants[index] = Some(participant.clone());
        self.players[index].connected = true;
        self.admission_order.push(connection);
        tracing::info!(
            "Participant '{}' admitted as '{}' on connection '{}'",
            participant,
            symbol,
            connection
        );

        if let Some(session) = &self.session {
            let snapshot = session.snapshot(&self.players);
            self.notify(&connection, &GameEvent::SessionStarted(snapshot))
                .await;
        }
        self.notify(&connection, &GameEvent::SymbolAssigned(symbol))
            .await;
        self.announce_presence(&connection).await;
        self.request_configuration().await;

        Ok(Admission {
            seat,
            symbol,
            resumed,
        })
    }

    /// セッションの構成を実行
    ///
    /// 新しいセッションを作成し、全員にスナップショットを、各コネクションに
    /// それぞれの記号を送信します。
    ///
    /// # Returns
    ///
    /// * `Ok(SessionSnapshot)` - 作成されたセッションのスナップショット
    /// * `Err(ConfigureError)` - 構成権限なし、または不正な設定値
    pub async fn configure(
        &mut self,
        connection: ConnectionId,
        board_size: usize,
        win_length: usize,
    ) -> Result<SessionSnapshot, ConfigureError> {
        let config = match self.validate_config(&connection, board_size, win_length) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(
                    "Refusing configuration {}x{} (win {}) from '{}': {}",
                    board_size,
                    board_size,
                    win_length,
                    connection,
                    error
                );
                self.notify(
                    &connection,
                    &GameEvent::ConfigureRejected {
                        reason: error.to_string(),
                    },
                )
                .await;
                return Err(error);
            }
        };

        let session = GameSession::start(config, &mut self.players, self.clock.now_millis());
        let snapshot = session.snapshot(&self.players);
        self.session = Some(session);
        self.prompted = None;
        tracing::info!(
            "Session started: {}x{} board, {} in a row",
            config.board_size(),
            config.board_size(),
            config.win_length()
        );

        self.broadcast(&GameEvent::SessionStarted(snapshot.clone()))
            .await;
        for seat in Seat::ALL {
            if let Some(binding) = &self.bindings[seat.index()] {
                let event = GameEvent::SymbolAssigned(seat.symbol());
                self.notify(&binding.connection, &event).await;
            }
        }

        Ok(snapshot)
    }

    /// 手の適用を実行
    ///
    /// 受理された手は `movesUpdated` として全員に配信され、勝利または引き分けで
    /// セッションが終了した場合は続けて `sessionEnded` が配信され、構成者には
    /// 次の対局のための `configureRequested` が送られます。
    /// 拒否された手は状態を変更せず、送信者にだけ `moveRejected` を返します。
    pub async fn submit_move(
        &mut self,
        connection: ConnectionId,
        coordinate: Coordinate,
    ) -> Result<MoveOutcome, MoveRejection> {
        let outcome = match self.apply_move(&connection, coordinate) {
            Ok(outcome) => outcome,
            Err(rejection) => {
                tracing::debug!(
                    "Move {} from '{}' rejected: {}",
                    coordinate,
                    connection,
                    rejection
                );
                self.notify(
                    &connection,
                    &GameEvent::MoveRejected {
                        coordinate,
                        rejection,
                    },
                )
                .await;
                return Err(rejection);
            }
        };

        tracing::debug!("Move {} from '{}' accepted", coordinate, connection);
        self.broadcast(&GameEvent::MovesUpdated(self.players.clone()))
            .await;

        let status = match outcome {
            MoveOutcome::Continued => return Ok(outcome),
            MoveOutcome::Won(symbol) => {
                tracing::info!("Player '{}' wins the session", symbol);
                SessionStatus::Won(symbol)
            }
            MoveOutcome::Draw => {
                tracing::info!("Session ended in a draw");
                SessionStatus::Draw
            }
        };
        self.broadcast(&GameEvent::SessionEnded {
            status,
            players: self.players.clone(),
        })
        .await;
        self.request_configuration().await;

        Ok(outcome)
    }

    /// 参加者の切断を実行
    ///
    /// プレイヤーを未接続にするだけで、取得セル・勝利数・セッション状態は維持します。
    /// セッション中であれば、残った相手に `movesUpdated` で接続状態の変化を通知します。
    ///
    /// # Returns
    ///
    /// 空いた席（受付されていないコネクションの場合は `None`）
    pub async fn release(&mut self, connection: ConnectionId) -> Option<Seat> {
        self.channel.unregister(&connection).await;
        self.admission_order.retain(|c| *c != connection);
        if self.prompted == Some(connection) {
            self.prompted = None;
        }

        let seat = self.seat_of(&connection)?;
        self.bindings[seat.index()] = None;
        self.players[seat.index()].connected = false;
        tracing::info!(
            "Player '{}' released by connection '{}'",
            seat.symbol(),
            connection
        );

        self.announce_presence(&connection).await;
        self.request_configuration().await;
        Some(seat)
    }

    /// 現在のセッションのスナップショット
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session
            .as_ref()
            .map(|session| session.snapshot(&self.players))
    }

    pub fn players(&self) -> &PlayerPair {
        &self.players
    }

    /// 接続中のプレイヤー数
    pub fn connected_count(&self) -> usize {
        self.bindings.iter().flatten().count()
    }

    /// コネクションが座っている席
    pub fn seat_of(&self, connection: &ConnectionId) -> Option<Seat> {
        Seat::ALL.into_iter().find(|seat| {
            self.bindings[seat.index()]
                .as_ref()
                .is_some_and(|binding| binding.connection == *connection)
        })
    }

    /// 参加者に割り当てる席を選ぶ
    ///
    /// 同じ参加者 ID が最後に座っていた空席を優先し、なければ先頭の空席を返す。
    fn choose_seat(&self, participant: &ParticipantId) -> Result<Seat, AdmissionError> {
        let free_seats: Vec<Seat> = Seat::ALL
            .into_iter()
            .filter(|seat| self.bindings[seat.index()].is_none())
            .collect();
        if free_seats.is_empty() {
            return Err(AdmissionError::CapacityExceeded);
        }
        if self
            .bindings
            .iter()
            .flatten()
            .any(|binding| binding.participant == *participant)
        {
            let error = AdmissionError::DuplicateParticipant(participant.to_string());
            return Err(error);
        }

        free_seats
            .iter()
            .copied()
            .find(|&seat| self.last_held_by(seat, participant))
            .or_else(|| free_seats.first().copied())
            .ok_or(AdmissionError::CapacityExceeded)
    }

    /// 席に最後に座っていたのがこの参加者かどうか
    fn last_held_by(&self, seat: Seat, participant: &ParticipantId) -> bool {
        self.previous_participants[seat.index()].as_ref() == Some(participant)
    }

    fn validate_config(
        &self,
        connection: &ConnectionId,
        board_size: usize,
        win_length: usize,
    ) -> Result<GameConfig, ConfigureError> {
        if self.seat_of(connection).is_none() {
            return Err(ConfigureError::NotSeated);
        }
        if self.admission_order.first() != Some(connection) {
            return Err(ConfigureError::NotConfigurator);
        }
        let config = GameConfig::new(board_size, win_length)?;
        if board_size > self.settings.max_board_size {
            return Err(ConfigError::BoardTooLarge {
                board_size,
                maximum: self.settings.max_board_size,
            }
            .into());
        }
        Ok(config)
    }

    fn apply_move(
        &mut self,
        connection: &ConnectionId,
        coordinate: Coordinate,
    ) -> Result<MoveOutcome, MoveRejection> {
        let seat = self.seat_of(connection).ok_or(MoveRejection::NotSeated)?;
        let session = self.session.as_mut().ok_or(MoveRejection::NoSession)?;
        session.submit_move(&mut self.players, seat, coordinate)
    }

    /// 対局中でない場合、構成者に設定を依頼する（同じコネクションには 1 回だけ）
    ///
    /// セッションがまだない場合と、直前のセッションが終了している場合が対象です。
    async fn request_configuration(&mut self) {
        let in_progress = self
            .session
            .as_ref()
            .is_some_and(|session| !session.status().is_terminal());
        if in_progress {
            return;
        }
        let Some(&configurator) = self.admission_order.first() else {
            return;
        };
        if self.prompted == Some(configurator) {
            return;
        }
        self.prompted = Some(configurator);
        tracing::info!("Requesting configuration from '{}'", configurator);
        self.notify(&configurator, &GameEvent::ConfigureRequested)
            .await;
    }

    async fn notify(&self, connection: &ConnectionId, event: &GameEvent) {
        if let Err(e) = self.channel.send_to(connection, event).await {
            tracing::warn!(
                "Failed to send '{}' to '{}': {}",
                event.name(),
                connection,
                e
            );
        }
    }

    /// 席に座っている全てのコネクションに配信
    async fn broadcast(&self, event: &GameEvent) {
        self.broadcast_to(self.seated_connections(), event).await;
    }

    /// セッション中であれば、接続状態が変わったコネクション以外に最新のプレイヤー状態を配信
    async fn announce_presence(&self, changed: &ConnectionId) {
        if self.session.is_none() {
            return;
        }
        let targets: Vec<ConnectionId> = self
            .seated_connections()
            .into_iter()
            .filter(|target| target != changed)
            .collect();
        let event = GameEvent::MovesUpdated(self.players.clone());
        self.broadcast_to(targets, &event).await;
    }

    async fn broadcast_to(&self, targets: Vec<ConnectionId>, event: &GameEvent) {
        if targets.is_empty() {
            return;
        }
        if let Err(e) = self.channel.broadcast(targets, event).await {
            tracing::warn!("Failed to broadcast '{}': {}", event.name(), e);
        }
    }

    fn seated_connections(&self) -> Vec<ConnectionId> {
        self.bindings
            .iter()
            .flatten()
            .map(|binding| binding.connection)
            .collect()
    }
}
