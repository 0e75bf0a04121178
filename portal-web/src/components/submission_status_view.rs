use leptos::*;

#[component]
pub fn SubmissionStatusView(
    is_submitting: Signal<bool>,
    submit_error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
       // Show a progress bar while the form is submitting
       { move || if is_submitting.get() {
           view! {
               <div class="w-full h-1 bg-blue-200 overflow-hidden">
                   <div class="h-1 w-1/3 bg-blue-600 animate-pulse"></div>
               </div>
           }.into_view()
       } else {
           view! { }.into_view()
       }}

       // Show an error message if the last submission failed
       { move || if let Some(error) = submit_error.get() {
           view! {
               <div class="text-red-500">
                   {error}
               </div>
           }.into_view()
       } else {
           view! { }.into_view()
       }}
    }
}
