use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <style>
                {r#"
                    .about-page {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }
                    .about-page h1 { color: #bfe6ff; }
                    .about-page p {
                        color: rgba(255, 255, 255, 0.85);
                        line-height: 1.7;
                    }
                    .about-page blockquote {
                        border-left: 3px solid #66ccff;
                        margin: 2rem 0;
                        padding-left: 1.2rem;
                        color: rgba(255, 255, 255, 0.7);
                        font-style: italic;
                    }
                "#}
            </style>
            <h1>{"About Deep Currents"}</h1>
            <p>
                {"Deep Currents started as a rented camera, a borrowed wetsuit, and a ferry ticket
                  to a harbour whose name I still can't pronounce. Ten years on it's a small crew,
                  a very patient boat, and a few hundred hours of footage from places where
                  sunlight is a rumour."}
            </p>
            <p>
                {"I'm Nerida Vale. I film the ocean because it is the last place on Earth that
                  doesn't care about your schedule. Every expedition on this site was cut from
                  dives we actually made, in the order we actually made them, including the ones
                  where the interesting thing happened while the camera was off."}
            </p>
            <blockquote>
                {"\"The sea doesn't keep secrets. It just tells them very slowly.\""}
            </blockquote>
            <p>
                {"Everything here is free to watch. If you want to point the boat somewhere,
                  the suggestion form on the expeditions page goes straight to the logbook on
                  my desk. And if you've watched all the way to the end credits of the latest
                  film, you may have noticed something worth typing in."}
            </p>
        </div>
    }
}
