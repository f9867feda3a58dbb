//! Pantry prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    aggregate::aggregate,
    lines::{AggregatedLine, CartLineItem},
    receipt::{
        PdfReceiptRenderer, ReceiptError, ReceiptFont, ReceiptLayout, ReceiptLayoutSettings,
        ReceiptRenderer, RenderedReceipt, pdf::PDF_CONTENT_TYPE,
    },
};
