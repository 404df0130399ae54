//! Loading of records from CSV exports of public datasets

use crate::{
    progress::{ProgressReport, ProgressTracker, Work},
    Result,
};
use anyhow::Context;
use csv_async::{AsyncReaderBuilder, Trim};
use futures::stream::{BoxStream, StreamExt};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::{
    fmt,
    io::{self, ErrorKind},
    path::PathBuf,
};
use tokio::{fs::File, io::AsyncRead};
use tokio_util::{
    bytes::Bytes,
    io::{ReaderStream, StreamReader},
};

/// Where a CSV file can be found
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Location {
    /// File on the local filesystem
    File(PathBuf),

    /// HTTP(S) URL
    Url(Box<str>),
}
//
impl Location {
    /// Interpret a user-provided path or URL
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::Url(input.into())
        } else {
            Self::File(input.into())
        }
    }
}
//
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Read a CSV file and turn each of its rows into a record
///
/// `Row` is the raw row layout of the data source, which is converted into the
/// record type `R` as soon as it has been parsed.
pub async fn load<Row, R>(
    location: &Location,
    client: &reqwest::Client,
    report: &ProgressReport,
) -> Result<Vec<R>>
where
    Row: DeserializeOwned + 'static,
    R: From<Row>,
{
    // Set up a stream of raw bytes
    let (bytes, reading) = open(location, client, report).await?;
    let tracker = reading.clone();
    let csv_bytes = StreamReader::new(bytes.map(move |res| {
        // Track how many input bytes have been read so far
        res.inspect(|bytes_block| tracker.make_progress(bytes_block.len() as u64))
    }));

    // Parse and convert the rows
    let parsing = report.add("Parsing records", Work::Records);
    let records = read_records::<Row, R>(csv_bytes, &parsing)
        .await
        .with_context(|| format!("reading records from {location}"))?;
    reading.finish();
    parsing.finish();
    log::info!("Loaded {} records from {location}", records.len());
    Ok(records)
}

/// Start reading the bytes of a CSV file
///
/// Returns the byte stream, along with a tracker of how many bytes were read.
async fn open(
    location: &Location,
    client: &reqwest::Client,
    report: &ProgressReport,
) -> Result<(BoxStream<'static, io::Result<Bytes>>, ProgressTracker)> {
    match location {
        Location::File(path) => {
            let context = || format!("opening {}", path.display());
            let file = File::open(path).await.with_context(context)?;
            let len = file.metadata().await.with_context(context)?.len();
            log::debug!("Reading {len} bytes from {}", path.display());
            let reading = report.add("Reading data", Work::Bytes(len));
            Ok((ReaderStream::new(file).boxed(), reading))
        }
        Location::Url(url) => {
            let response = client
                .get(&**url)
                .send()
                .await
                .and_then(Response::error_for_status)
                .with_context(|| format!("initiating download of {url}"))?;
            // Socrata exports are usually chunked, without a known length
            let reading = match response.content_length() {
                Some(len) => report.add("Downloading data", Work::Bytes(len)),
                None => report.add("Downloading data", Work::UnknownBytes),
            };
            let bytes = response
                .bytes_stream()
                // Translate reqwest errors into I/O errors
                .map(|res| res.map_err(|e| io::Error::new(ErrorKind::Other, Box::new(e))));
            Ok((bytes.boxed(), reading))
        }
    }
}

/// Parse CSV rows with headers and turn them into records
pub async fn read_records<Row, R>(
    input: impl AsyncRead + Unpin + Send + 'static,
    progress: &ProgressTracker,
) -> Result<Vec<R>>
where
    Row: DeserializeOwned + 'static,
    R: From<Row>,
{
    let rows = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(input)
        .into_deserialize::<Row>();
    let mut rows = std::pin::pin!(rows);
    let mut records = Vec::new();
    while let Some(row) = rows.next().await {
        // Header is line 1, so first row is line 2
        let row = row.with_context(|| format!("decoding CSV row at line {}", records.len() + 2))?;
        records.push(R::from(row));
        progress.make_progress(1);
    }
    log::debug!("Parsed {} rows", progress.position());
    Ok(records)
}
