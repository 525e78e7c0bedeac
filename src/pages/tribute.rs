use yew::prelude::*;

#[function_component(Tribute)]
pub fn tribute() -> Html {
    html! {
        <div class="tribute-page">
            <style>
                {r#"
                    .tribute-page {
                        max-width: 680px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                        text-align: center;
                    }
                    .tribute-page h1 { color: #bfe6ff; }
                    .tribute-page .tribute-card {
                        background: rgba(8, 28, 44, 0.8);
                        border: 1px solid rgba(102, 204, 255, 0.15);
                        border-radius: 16px;
                        padding: 2.5rem;
                        margin-top: 2rem;
                    }
                    .tribute-page p {
                        color: rgba(255, 255, 255, 0.85);
                        line-height: 1.7;
                        text-align: start;
                    }
                    .tribute-page .dates {
                        color: #66ccff;
                        letter-spacing: 0.15em;
                    }
                "#}
            </style>
            <h1>{"For Esko"}</h1>
            <div class="tribute-card">
                <p class="dates">{"1949 – 2021"}</p>
                <p>
                    {"Esko Vale taught me to dive in a quarry with visibility you could measure
                      in forearms. He held that the sea owed nobody anything, least of all good
                      footage, and that the correct response to a failed dive was coffee and a
                      better plan."}
                </p>
                <p>
                    {"Half the camera housings we still use were machined on his lathe. The other
                      half leak, which he would say proves the point. Every film on this site
                      ends with his sign-off, and the ones that don't, should."}
                </p>
                <p>
                    {"Fair winds, old man. Mind your ears on the way down."}
                </p>
            </div>
        </div>
    }
}
