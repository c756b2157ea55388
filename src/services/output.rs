use crate::domain::models::JsonOut;
use crate::services::printer::Printer;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_json(data);
    }
    let mut printer = Printer::stdout();
    for d in data {
        printer.print(&row(d))?;
    }
    Ok(())
}

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    let mut printer = Printer::stdout();
    printer.print(&serde_json::to_string_pretty(&JsonOut { ok: true, data })?)?;
    Ok(())
}
