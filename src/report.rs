use futures::TryStreamExt;
use std::io::Write;
use tracing::{error, info};

use crate::{
    config::ReportConfig,
    error::ReportError,
    models::UserReport,
    session,
    store::UserStore,
};

/// Counts users, then streams the per-interest aggregation, writing each
/// line as soon as its result is known. Lines written before a failure are
/// left in `out`.
pub async fn write_user_report<S, W>(store: &S, out: &mut W) -> Result<UserReport, ReportError>
where
    S: UserStore + ?Sized,
    W: Write,
{
    let total_users = store.count_users().await?;

    writeln!(out, "Conexão com MongoDB estabelecida com sucesso.")?;
    writeln!(out, "Total de usuários cadastrados: {}", total_users)?;
    writeln!(out)?;
    writeln!(out, "Usuários por Área de Interesse:")?;

    let mut interests = Vec::new();
    let mut rows = store.interest_counts().await?;
    while let Some(row) = rows.try_next().await? {
        writeln!(out, "- {}: {}", row.label(), row.count)?;
        interests.push(row);
    }
    out.flush()?;

    info!("Report covered {} users across {} interest areas", total_users, interests.len());
    Ok(UserReport { total_users, interests })
}

pub async fn generate_user_report<W: Write>(
    config: &ReportConfig,
    out: &mut W,
) -> Result<UserReport, ReportError> {
    session::with_users(config, |store| async move { write_user_report(&store, out).await }).await
}

/// Full command-line run: start banner, the report or a single failure
/// line, then the completion line. A failed report still finishes normally
/// on the output side; the error is handed back for the caller to log.
pub async fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<UserReport, ReportError> {
    writeln!(out, "Iniciando o processamento de dados...")?;

    let result = generate_user_report(config, out).await;
    if let Err(e) = &result {
        error!("User report failed: {}", e);
        writeln!(out, "Erro ao conectar ou processar dados: {}", e)?;
    }

    writeln!(out, "Processamento concluído.")?;
    out.flush()?;
    result
}
