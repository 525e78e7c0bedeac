use yew::prelude::*;

/// Rendered only once the gate reports the session unlocked.
#[function_component(SecretGarden)]
pub fn secret_garden() -> Html {
    html! {
        <div class="secret-page">
            <style>
                {r#"
                    .secret-page {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }
                    .secret-page h1 {
                        background: linear-gradient(45deg, #9fe8c5, #66ccff);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .secret-page p {
                        color: rgba(255, 255, 255, 0.85);
                        line-height: 1.7;
                    }
                    .secret-page .coordinates {
                        font-family: monospace;
                        font-size: 1.2rem;
                        color: #9fe8c5;
                        background: rgba(8, 28, 44, 0.8);
                        border-radius: 8px;
                        padding: 1rem;
                        text-align: center;
                        margin: 2rem 0;
                    }
                    .secret-page .bonus-list li {
                        color: rgba(255, 255, 255, 0.85);
                        margin: 0.6rem 0;
                    }
                "#}
            </style>
            <h1>{"The Secret Garden"}</h1>
            <p>
                {"Welcome to the crew's side of the site. This is the seagrass meadow we never
                  published: forty minutes of slack-tide light, seahorses the size of a thumbnail,
                  and not one other boat on the horizon all week."}
            </p>
            <div class="coordinates">
                {"39°27'N 31°07'W — slack tide, May through June"}
            </div>
            <ul class="bonus-list">
                <li>{"The uncut lander reel from the Midnight Zone, all six hours, no music."}</li>
                <li>{"Esko's original dive slates, scanned, coffee stains included."}</li>
                <li>{"The out-takes where the octopus wins."}</li>
            </ul>
            <p>
                {"Keep the coordinates off the charts, please. The meadow doesn't need an
                  audience; it needs another quiet decade."}
            </p>
        </div>
    }
}
