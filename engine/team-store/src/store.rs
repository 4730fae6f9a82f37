//! Postgres-backed store operations

use std::collections::HashMap;

use chrono::NaiveDate;
use percentile_engine::CurveSet;
use roster_core::RosterView;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::config::StoreConfig;
use crate::models::{CoachRow, CurveRow, MeasurementRow, NewNote, NoteRow, PlayerRow};
use crate::Result;

/// Team data store over a Postgres pool
pub struct TeamStore {
    config: StoreConfig,
    pool: PgPool,
}

impl TeamStore {
    /// Connect to the database and build a store
    pub async fn connect(config: StoreConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;

        // Bring the schema up to date
        sqlx::migrate!("./migrations").run(&pool).await?;

        info!("Connected to team store");
        Ok(Self { config, pool })
    }

    /// Underlying pool, for callers with bespoke queries
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fetch all player rows, roster order
    pub async fn fetch_players(&self) -> Result<Vec<PlayerRow>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, first_name, last_name, grad_year, rapsodo_id \
             FROM players ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Fetch all coach rows
    pub async fn fetch_coaches(&self) -> Result<Vec<CoachRow>> {
        let rows =
            sqlx::query_as::<_, CoachRow>("SELECT id, name FROM coaches ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Build the classified roster view for an evaluation date
    ///
    /// Class levels and active flags are derived here on every call and
    /// never read back from the store.
    pub async fn load_roster(&self, as_of: NaiveDate) -> Result<RosterView> {
        let ladder = self.config.roster.ladder()?;
        let players = self.fetch_players().await?;

        let entries = players
            .into_iter()
            .map(PlayerRow::into_roster_entry)
            .collect::<Result<Vec<_>>>()?;

        let view = RosterView::build(entries, as_of, &ladder)?;
        info!(
            players = view.len(),
            active = view.active().count(),
            %as_of,
            "Built roster view"
        );
        Ok(view)
    }

    /// Load and validate all reference curves into a curve set
    ///
    /// A malformed row aborts the load with the offending row identified;
    /// no partially loaded curve table is ever returned.
    pub async fn load_curves(&self) -> Result<CurveSet> {
        let rows = sqlx::query_as::<_, CurveRow>(
            "SELECT id, class_level, metric, \
                    p_1, p_10, p_20, p_30, p_40, p_50, p_60, p_70, p_80, p_90, p_99 \
             FROM reference_curves",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut curves = CurveSet::new();
        for row in rows {
            let row_id = row.id;
            let curve = row.into_curve().map_err(|e| {
                error!(row_id, "Rejected reference curve row: {e}");
                e
            })?;
            if let Some(replaced) = curves.insert(curve) {
                warn!(
                    row_id,
                    class_level = %replaced.class_level(),
                    metric = replaced.metric(),
                    "Duplicate reference curve row replaced an earlier one"
                );
            }
        }

        info!(curves = curves.len(), "Loaded reference curves");
        Ok(curves)
    }

    /// Sample values for one metric, grouped by player
    pub async fn fetch_measurements(&self, metric: &str) -> Result<HashMap<i64, Vec<f64>>> {
        let rows = sqlx::query_as::<_, MeasurementRow>(
            "SELECT id, player_id, metric, value, recorded_on, raw \
             FROM measurements WHERE metric = $1 ORDER BY recorded_on",
        )
        .bind(metric)
        .fetch_all(&self.pool)
        .await?;

        let mut by_player: HashMap<i64, Vec<f64>> = HashMap::new();
        for row in rows {
            by_player.entry(row.player_id).or_default().push(row.value);
        }
        Ok(by_player)
    }

    /// Sample values for one player and metric, recording order
    pub async fn fetch_player_measurements(
        &self,
        player_id: i64,
        metric: &str,
    ) -> Result<Vec<f64>> {
        let rows = sqlx::query_as::<_, MeasurementRow>(
            "SELECT id, player_id, metric, value, recorded_on, raw \
             FROM measurements WHERE player_id = $1 AND metric = $2 ORDER BY recorded_on",
        )
        .bind(player_id)
        .bind(metric)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.value).collect())
    }

    /// Insert a coaching note, returning its id
    pub async fn insert_note(&self, note: NewNote) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO notes (player_id, coach_id, note_type, body, created_at) \
             VALUES ($1, $2, $3, $4, NOW()) RETURNING id",
        )
        .bind(note.player_id)
        .bind(note.coach_id)
        .bind(note.note_type.to_string())
        .bind(&note.body)
        .fetch_one(&self.pool)
        .await?;

        info!(note_id = id, player_id = note.player_id, "Inserted note");
        Ok(id)
    }

    /// Notes for one player, newest first
    pub async fn fetch_notes(&self, player_id: i64) -> Result<Vec<NoteRow>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            "SELECT id, player_id, coach_id, note_type, body, created_at \
             FROM notes WHERE player_id = $1 ORDER BY created_at DESC",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
