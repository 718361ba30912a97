//! Execution engine module
//!
//! Main read loop and stream orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SyncEngine` - Walks the stream graph, paginates each stream and
//!   writes Singer messages
//! - `SyncConfig` - Configuration for sync operations
//! - `SyncStats` - Counters reported at the end of a sync

mod types;

pub use types::{SyncConfig, SyncStats};

use crate::catalog::Selection;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::output::{Message, MessageWriter};
use crate::pagination::{url_params, Cursor, LinkHeaderPaginator, Paginator};
use crate::schema::conform_record;
use crate::state::TapState;
use crate::streams::{StreamDescriptor, StreamGraph};
use crate::types::Record;
use chrono::Utc;
use futures::future::BoxFuture;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sync engine for orchestrating data extraction
pub struct SyncEngine {
    /// HTTP client
    client: HttpClient,
    /// Tap state, updated as streams complete
    state: TapState,
    /// Follows `rel="next"` links between pages
    paginator: LinkHeaderPaginator,
    /// Sync configuration
    config: SyncConfig,
    /// Statistics
    stats: SyncStats,
    /// Streams already warned about unknown properties
    conform_warned: HashSet<String>,
}

impl SyncEngine {
    /// Create a new sync engine
    pub fn new(client: HttpClient, state: TapState) -> Self {
        Self {
            client,
            state,
            paginator: LinkHeaderPaginator::default(),
            config: SyncConfig::default(),
            stats: SyncStats::default(),
            conform_warned: HashSet::new(),
        }
    }

    /// Set sync configuration
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the current state
    pub fn state(&self) -> &TapState {
        &self.state
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Sync every root stream that is selected or has a selected descendant
    pub async fn sync_all<W: Write + Send>(
        &mut self,
        graph: &StreamGraph,
        selection: &Selection,
        writer: &mut MessageWriter<W>,
    ) -> Result<SyncStats> {
        let start = Instant::now();

        for root in graph.roots() {
            if !selection.needs_sync(graph, &root.name) {
                debug!(stream = %root.name, "Stream not selected, skipping");
                continue;
            }
            self.sync_stream(graph, selection, writer, root, None).await?;
            self.stats.add_stream();
        }

        self.stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            streams = self.stats.streams_synced,
            contexts = self.stats.contexts_synced,
            pages = self.stats.pages_fetched,
            records = self.stats.records_synced,
            duration_ms = self.stats.duration_ms,
            "Sync completed"
        );

        Ok(self.stats.clone())
    }

    /// Sync one stream for one context, including every child context its
    /// records produce
    pub fn sync_stream<'a, W: Write + Send>(
        &'a mut self,
        graph: &'a StreamGraph,
        selection: &'a Selection,
        writer: &'a mut MessageWriter<W>,
        descriptor: &'a StreamDescriptor,
        context: Option<&'a Context>,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let name = descriptor.name.as_str();
            let emit = selection.is_selected(name);
            let deselected = selection.deselected(name).cloned().unwrap_or_default();
            let path = descriptor.render_path(&context.cloned().unwrap_or_default())?;

            match context {
                Some(ctx) => info!(stream = name, context = %ctx, "Beginning full table sync"),
                None => info!(stream = name, "Beginning full table sync"),
            }

            if emit && !writer.has_schema(name) {
                writer.write(&schema_message(descriptor, &deselected))?;
            }

            let decoder = descriptor.decoder();
            let mut cursor: Option<Cursor> = None;
            let mut requested: HashSet<BTreeMap<String, String>> = HashSet::new();
            let mut page_count = 0usize;
            let mut record_count = 0usize;

            loop {
                let params = url_params(descriptor.page_size, context, cursor.as_ref());
                requested.insert(params.clone());

                let response = self
                    .client
                    .get_with_config(&path, RequestConfig::new().with_query(params))
                    .await?;
                page_count += 1;
                self.stats.add_page();

                let records = decoder.decode(&response.body)?;
                debug!(
                    stream = name,
                    page = page_count,
                    records = records.len(),
                    "Fetched page"
                );

                for record in records {
                    let record = self.conform(descriptor, record);

                    if emit {
                        let mut emitted = record.clone();
                        emitted.retain(|key, _| !deselected.contains(key));
                        writer.write(&Message::record(name, emitted, Utc::now()))?;
                        self.stats.add_records(1);
                    }

                    for edge in graph.children(name) {
                        if !selection.needs_sync(graph, &edge.child) {
                            continue;
                        }
                        let Some(child_context) = edge.child_context(&record) else {
                            continue;
                        };
                        let child = graph.get(&edge.child)?;
                        self.sync_stream(graph, selection, writer, child, Some(&child_context))
                            .await?;
                        self.stats.add_context();
                    }

                    record_count += 1;
                    if self.config.limit_reached(record_count) {
                        break;
                    }
                }

                if self.config.limit_reached(record_count) {
                    debug!(stream = name, max_records = self.config.max_records, "Record limit reached");
                    break;
                }

                let Some(next) = self.paginator.next_cursor(&response) else {
                    break;
                };

                if requested.contains(&url_params(descriptor.page_size, context, Some(&next))) {
                    return Err(Error::PaginationLoop {
                        stream: name.to_string(),
                        token: next.token().to_string(),
                    });
                }
                cursor = Some(next);
            }

            self.state.mark_synced(name, context);
            writer.write(&Message::state(self.state.to_value()?))?;

            info!(
                stream = name,
                pages = page_count,
                records = record_count,
                "Completed full table sync"
            );
            Ok(())
        })
    }

    /// Drop properties missing from the schema, warning once per stream
    fn conform(&mut self, descriptor: &StreamDescriptor, record: Record) -> Record {
        let (record, removed) = conform_record(&descriptor.schema, record);
        if !removed.is_empty() && self.conform_warned.insert(descriptor.name.clone()) {
            warn!(
                stream = %descriptor.name,
                properties = ?removed,
                "Properties not in the stream schema were removed from records"
            );
        }
        record
    }
}

/// SCHEMA message for a stream, minus deselected properties
fn schema_message(descriptor: &StreamDescriptor, deselected: &BTreeSet<String>) -> Message {
    let mut schema = descriptor.json_schema();
    if let Some(properties) = schema.get_mut("properties").and_then(|p| p.as_object_mut()) {
        properties.retain(|key, _| !deselected.contains(key));
    }
    if let Some(required) = schema.get_mut("required").and_then(|r| r.as_array_mut()) {
        required.retain(|key| key.as_str().map_or(true, |k| !deselected.contains(k)));
    }
    Message::schema(&descriptor.name, schema, descriptor.primary_keys.clone())
}
