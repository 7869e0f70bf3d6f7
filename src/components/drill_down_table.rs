use yew::prelude::*;

use crate::hooks::use_samples::use_samples;
use crate::models::selection::DrillDownTarget;

#[derive(Properties, PartialEq)]
pub struct DrillDownTableProps {
    pub target: DrillDownTarget,
}

/// Sample submissions for the clicked keyword and month, in API order
#[function_component(DrillDownTable)]
pub fn drill_down_table(props: &DrillDownTableProps) -> Html {
    let state = use_samples(props.target.clone());

    let Some(rows) = state.data().filter(|rows| !rows.is_empty()) else {
        return html! {};
    };

    html! {
        <div class="drill-down">
            <table class="drill-down-table">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Submission Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        rows.iter().enumerate().map(|(index, row)| html! {
                            <tr key={index}>
                                <td>
                                    <a
                                        href={row.item_url()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {&row.title}
                                    </a>
                                </td>
                                <td>{&row.submission_date}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}
