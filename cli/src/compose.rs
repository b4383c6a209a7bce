//! Layer `build` flags over the configured seed options.

use curlgen_core::RequestOptions;

use crate::args::BuildArgs;

/// Combine `seed` with explicit flags.
///
/// Boolean flags can only switch things on. Flag headers follow seed
/// headers. Passing `-b` or `-c` turns cookie handling on; a cookie file not
/// given on the command line is only kept if the seed already had cookies
/// enabled, so `-b jar` alone never adds a `-c`.
pub fn options_from_args(seed: RequestOptions, args: BuildArgs) -> RequestOptions {
    let mut options = seed;

    options.url = args.url;
    if let Some(method) = args.method {
        options.method = method;
    }
    options.headers.extend(args.headers);
    if let Some(data) = args.data {
        options.data = data;
    }
    if let Some(format) = args.data_format {
        options.data_format = format;
    }

    options.insecure |= args.insecure;
    options.verbose |= args.verbose;
    options.compressed |= args.compressed;

    if args.cookie_input_file.is_some() || args.cookie_output_file.is_some() {
        let keep_seed = options.include_cookies;
        options.include_cookies = true;
        options.cookie_input_file = pick(args.cookie_input_file, options.cookie_input_file, keep_seed);
        options.cookie_output_file = pick(args.cookie_output_file, options.cookie_output_file, keep_seed);
    }

    if let Some(path) = args.output_file {
        options.use_output_file = true;
        options.output_file = path;
    }

    options
}

fn pick(flag: Option<String>, seed: String, keep_seed: bool) -> String {
    match flag {
        Some(path) => path,
        None if keep_seed => seed,
        None => String::new(),
    }
}
