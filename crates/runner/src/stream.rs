// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-writer pump from child pipes into the output sink.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Child;

const CHUNK: usize = 8192;

/// Drain the child's stdout and stderr into the sink from one task.
///
/// Both pipes are read chunk by chunk via `select!`, so the sink only ever
/// has one writer and no locking is needed. Draining both pipes also keeps
/// the child from blocking on a full pipe while the other is being read.
///
/// stdout chunks are additionally appended to `capture` when provided;
/// stderr is never captured.
pub(crate) async fn pump<W>(
    child: &mut Child,
    sink: &mut W,
    mut capture: Option<&mut Vec<u8>>,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();
    let mut out_done = stdout.is_none();
    let mut err_done = stderr.is_none();
    let mut out_buf = vec![0u8; CHUNK];
    let mut err_buf = vec![0u8; CHUNK];

    loop {
        tokio::select! {
            read = chunk(&mut stdout, &mut out_buf), if !out_done => match read? {
                0 => out_done = true,
                n => {
                    sink.write_all(&out_buf[..n]).await?;
                    if let Some(buf) = capture.as_deref_mut() {
                        buf.extend_from_slice(&out_buf[..n]);
                    }
                }
            },
            read = chunk(&mut stderr, &mut err_buf), if !err_done => match read? {
                0 => err_done = true,
                n => sink.write_all(&err_buf[..n]).await?,
            },
            else => break,
        }
    }

    Ok(())
}

/// Read one chunk from an optional pipe. The `None` arm is unreachable under
/// the `select!` guards but keeps the branch total.
async fn chunk<R>(src: &mut Option<R>, buf: &mut [u8]) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    match src.as_mut() {
        Some(r) => r.read(buf).await,
        None => Ok(0),
    }
}
