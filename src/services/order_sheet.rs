//! Hoja imprimible de una orden de servicio (HTML)

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt::Write;

use super::catalog::{CatalogSnapshot, CUSTOMER_NOT_FOUND, VEHICLE_NOT_FOUND};
use crate::models::{Part, RecordId, Service, WorkOrder};
use crate::utils::format::{escape_html, format_brl, format_date_br};

const STYLE: &str = "body{font-family:Arial,sans-serif;margin:20px;color:#333}\
.header{text-align:center;margin-bottom:20px;border-bottom:2px solid #0d47a1;padding-bottom:10px}\
.title{font-size:24px;font-weight:bold;color:#0d47a1}\
.section{margin-bottom:20px}\
.section-title{font-size:18px;font-weight:bold;margin-bottom:10px;background-color:#f5f5f5;padding:5px}\
.info-row{display:flex;margin-bottom:5px}.info-label{font-weight:bold;width:150px}.info-value{flex:1}\
table{width:100%;border-collapse:collapse;margin-bottom:20px}\
th,td{border:1px solid #ddd;padding:8px;text-align:left}th{background-color:#f5f5f5}\
.total{text-align:right;font-weight:bold;font-size:18px;margin-top:20px;border-top:2px solid #0d47a1;padding-top:10px}\
.signature{margin-top:50px;display:flex;justify-content:space-between}\
.signature-line{width:200px;border-top:1px solid #333;margin-top:10px;text-align:center}\
.footer{margin-top:50px;text-align:center;font-size:12px;color:#666}";

/// Ids únicos que resuelven en el catálogo, en el orden de la orden
fn resolve<'a, T>(
    ids: &[RecordId],
    lookup: impl Fn(&RecordId) -> Option<&'a T>,
) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(*id))
        .filter_map(lookup)
        .collect()
}

fn info_row(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        "<div class=\"info-row\"><div class=\"info-label\">{}:</div><div class=\"info-value\">{}</div></div>",
        label,
        escape_html(value)
    );
}

fn service_rows(out: &mut String, services: &[&Service]) {
    if services.is_empty() {
        out.push_str("<tr><td colspan=\"4\" style=\"text-align: center\">Nenhum serviço registrado</td></tr>");
        return;
    }
    for s in services {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&s.data.name),
            escape_html(&s.data.description),
            escape_html(&s.data.estimated_time),
            format_brl(s.data.price)
        );
    }
}

fn part_rows(out: &mut String, parts: &[&Part]) {
    if parts.is_empty() {
        out.push_str("<tr><td colspan=\"4\" style=\"text-align: center\">Nenhuma peça utilizada</td></tr>");
        return;
    }
    for p in parts {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&p.data.name),
            escape_html(&p.data.code),
            escape_html(&p.data.brand),
            format_brl(p.data.price)
        );
    }
}

/// Renderiza la hoja de la orden. Referencias que no resuelven se muestran
/// con placeholders.
pub fn render_order_sheet(
    order: &WorkOrder,
    catalog: &CatalogSnapshot,
    generated_at: DateTime<Utc>,
) -> String {
    let d = &order.data;
    let vehicle = catalog.vehicle(&d.vehicle_id);
    let customer = catalog.owner_of(&d.vehicle_id);
    let services = resolve(&d.service_ids, |id| catalog.service(id));
    let parts = resolve(&d.part_ids, |id| catalog.part(id));
    let id = escape_html(order.id.as_str());

    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\"><title>Ordem de Serviço #{id}</title><style>{STYLE}</style></head><body>"
    );
    let _ = write!(
        out,
        "<div class=\"header\"><div class=\"title\">ORDEM DE SERVIÇO #{id}</div><div>Oficina Mecânica</div></div>"
    );

    out.push_str("<div class=\"section\"><div class=\"section-title\">Informações do Cliente</div>");
    info_row(&mut out, "Nome", customer.map_or(CUSTOMER_NOT_FOUND, |c| c.data.name.as_str()));
    info_row(&mut out, "Telefone", customer.map_or("-", |c| c.data.phone.as_str()));
    info_row(&mut out, "Email", customer.map_or("-", |c| c.data.email.as_str()));
    out.push_str("</div>");

    out.push_str("<div class=\"section\"><div class=\"section-title\">Informações do Veículo</div>");
    let brand_model = vehicle
        .map(|v| format!("{} {}", v.data.brand, v.data.model))
        .unwrap_or_else(|| VEHICLE_NOT_FOUND.to_string());
    info_row(&mut out, "Marca/Modelo", &brand_model);
    info_row(&mut out, "Placa", vehicle.map_or("-", |v| v.data.plate.as_str()));
    let year = vehicle.map_or_else(|| "-".to_string(), |v| v.data.year.to_string());
    info_row(&mut out, "Ano", &year);
    out.push_str("</div>");

    out.push_str("<div class=\"section\"><div class=\"section-title\">Detalhes da Ordem</div>");
    info_row(&mut out, "Data de Entrada", &format_date_br(&d.entry_date));
    let exit = d
        .exit_date
        .as_ref()
        .map_or_else(|| "Pendente".to_string(), format_date_br);
    info_row(&mut out, "Data de Saída", &exit);
    info_row(&mut out, "Status", d.status.label());
    let description = if d.description.trim().is_empty() {
        "Nenhuma descrição fornecida"
    } else {
        d.description.as_str()
    };
    info_row(&mut out, "Descrição", description);
    out.push_str("</div>");

    out.push_str("<div class=\"section\"><div class=\"section-title\">Serviços Realizados</div><table><thead><tr><th>Serviço</th><th>Descrição</th><th>Tempo Estimado</th><th>Valor</th></tr></thead><tbody>");
    service_rows(&mut out, &services);
    out.push_str("</tbody></table></div>");

    out.push_str("<div class=\"section\"><div class=\"section-title\">Peças Utilizadas</div><table><thead><tr><th>Peça</th><th>Código</th><th>Marca</th><th>Valor</th></tr></thead><tbody>");
    part_rows(&mut out, &parts);
    out.push_str("</tbody></table></div>");

    let _ = write!(
        out,
        "<div class=\"total\">Valor Total: {}</div>",
        format_brl(d.total)
    );
    out.push_str("<div class=\"signature\"><div><div class=\"signature-line\">Assinatura do Cliente</div></div><div><div class=\"signature-line\">Assinatura do Responsável</div></div></div>");
    let _ = write!(
        out,
        "<div class=\"footer\"><p>Oficina Mecânica - Documento gerado em {} às {}</p></div></body></html>",
        format_date_br(&generated_at),
        generated_at.format("%H:%M:%S")
    );

    out
}
