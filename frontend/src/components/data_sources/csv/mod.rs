//! Read-only table of a validated recipient file.

use common::model::csv::CsvPreview;
use yew::{classes, html, Component, Context, Html, Properties};

use crate::helpers::format_count;

#[derive(Properties, PartialEq)]
pub struct CsvPreviewProps {
    pub preview: CsvPreview,
}

pub struct CsvPreviewTable;

impl Component for CsvPreviewTable {
    type Message = ();
    type Properties = CsvPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CsvPreviewTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let preview = &ctx.props().preview;
        let phone = preview.phone_column_index;
        let content = preview.content_column_index;
        let role_class = move |idx: usize| {
            if idx == phone {
                Some("col-phone")
            } else if Some(idx) == content {
                Some("col-content")
            } else {
                None
            }
        };

        html! {
            <div class="csv-preview">
                <div class="csv-preview-summary">
                    <i class="material-icons">{"table_chart"}</i>
                    <span>{ format!("{} rows", format_count(preview.row_count())) }</span>
                    {
                        if preview.has_content_column() {
                            html! { <span class="chip">{"Per-row messages"}</span> }
                        } else {
                            html! { <span class="chip">{"Same message for all"}</span> }
                        }
                    }
                </div>
                <table>
                    <thead>
                        <tr>
                            { for preview.header().iter().enumerate().map(|(idx, cell)| html! {
                                <th class={classes!(role_class(idx))}>{ cell.clone() }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for preview.sample_rows().iter().map(|row| html! {
                            <tr>
                                { for row.iter().enumerate().map(|(idx, cell)| html! {
                                    <td class={classes!(role_class(idx))}>{ cell.clone() }</td>
                                }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    }
}
