//! Transfer Quote Service
//!
//! Drives the quote flow: ask the rate gateway, fall back to the static
//! table when it fails, then price the transfer locally.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use globepay_currencies::fallback_rate;
use globepay_types::{
    GatewayError, QuoteError, QuoteOutcome, QuoteRequest, RateGateway, RateSource,
    compute_quote, dto::ValidQuoteRequest,
};

/// Sequence number handed out when a quote request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuoteTicket(u64);

impl QuoteTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Orders concurrent quote requests so a slow, older response never
/// overwrites a newer one.
#[derive(Debug, Default)]
pub struct QuoteSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl QuoteSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tickets are strictly increasing, starting at 1.
    pub fn next_ticket(&self) -> QuoteTicket {
        QuoteTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Marks `ticket` as applied if it is newer than every ticket applied so
    /// far. Returns `false` for stale tickets.
    pub fn accept(&self, ticket: QuoteTicket) -> bool {
        self.applied.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }

    /// Highest ticket accepted so far, 0 if none.
    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}

/// Application service for transfer quotes.
///
/// Generic over `G: RateGateway` so the HTTP client can be swapped for a
/// scripted gateway in tests.
pub struct QuoteService<G: RateGateway> {
    gateway: G,
    sequencer: QuoteSequencer,
    timeout: Option<Duration>,
}

impl<G: RateGateway> QuoteService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            sequencer: QuoteSequencer::new(),
            timeout: None,
        }
    }

    /// Treats a gateway call slower than `timeout` as a failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn sequencer(&self) -> &QuoteSequencer {
        &self.sequencer
    }

    /// Prices a transfer.
    ///
    /// Invalid input is rejected before the gateway is contacted. A gateway
    /// failure is never an error here: the fallback rate is used and the
    /// outcome is marked [`RateSource::Fallback`].
    pub async fn quote(&self, req: &QuoteRequest) -> Result<QuoteOutcome, QuoteError> {
        let valid = req.validate()?;
        let (rate, rate_source) = self.resolve_rate(valid).await;
        let quote = compute_quote(valid.amount, valid.from, valid.to, rate)?;
        Ok(QuoteOutcome { quote, rate_source })
    }

    /// Prices a transfer from the fallback table without contacting the
    /// gateway.
    pub fn quote_offline(&self, req: &QuoteRequest) -> Result<QuoteOutcome, QuoteError> {
        let valid = req.validate()?;
        let rate = fallback_rate(valid.from, valid.to);
        let quote = compute_quote(valid.amount, valid.from, valid.to, rate)?;
        Ok(QuoteOutcome {
            quote,
            rate_source: RateSource::Fallback,
        })
    }

    /// Like [`quote`](Self::quote), but returns `Ok(None)` when a newer
    /// request has already been applied by the time this one completes.
    pub async fn quote_latest(
        &self,
        req: &QuoteRequest,
    ) -> Result<Option<QuoteOutcome>, QuoteError> {
        let ticket = self.sequencer.next_ticket();
        let result = self.quote(req).await;

        if !self.sequencer.accept(ticket) {
            tracing::debug!(
                ticket = ticket.value(),
                last_applied = self.sequencer.last_applied(),
                "discarding stale quote"
            );
            return Ok(None);
        }
        result.map(Some)
    }

    async fn resolve_rate(&self, req: ValidQuoteRequest) -> (f64, RateSource) {
        match self.fetch_live(req).await {
            Ok(quote) => (
                quote.rate,
                RateSource::Live {
                    timestamp: Some(quote.timestamp),
                },
            ),
            Err(err) => {
                let rate = fallback_rate(req.from, req.to);
                tracing::warn!(
                    from = %req.from,
                    to = %req.to,
                    rate,
                    error = %err,
                    "rate service unavailable, using fallback rate"
                );
                (rate, RateSource::Fallback)
            }
        }
    }

    async fn fetch_live(
        &self,
        req: ValidQuoteRequest,
    ) -> Result<globepay_types::RateQuote, GatewayError> {
        let fetch = self.gateway.fetch_rate(req.from, req.to, req.amount);
        let quote = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fetch)
                .await
                .map_err(|_| GatewayError::Timeout)??,
            None => fetch.await?,
        };
        quote.validate()
    }
}
