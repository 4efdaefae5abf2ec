//! Static page bodies.
//!
//! Dynamic pages are split into a begin/end pair with the generated part
//! written in between.

pub const INDEX: &str = "<html>\r\n<head><title>dynhttp</title></head>\r\n<body>\r\n\
<h1>dynhttp</h1>\r\n\
<p>A small dynamic HTTP/1.0 server.</p>\r\n\
<ul>\r\n\
<li><a href=\"/credits.htm\">Credits</a>\r\n\
<li><a href=\"/tasks.htm\">Task list</a>\r\n\
<li><a href=\"/lwip.htm\">Network stats</a>\r\n\
<li><a href=\"/testform.htm\">Test form</a>\r\n\
<li><a href=\"/test.json\">Sample JSON data</a>\r\n\
</ul>\r\n\
</body>\r\n</html>\r\n";

pub const CREDITS: &str = "<html>\r\n<head><title>Credits</title></head>\r\n<body>\r\n\
<h1>Credits</h1>\r\n\
<p>dynhttp server.</p>\r\n\
<p><a href=\"/\">Back</a></p>\r\n\
</body>\r\n</html>\r\n";

pub const ERR404: &str = "<html>\r\n<head><title>404</title></head>\r\n<body>\r\n\
<h1>404 - File not found</h1>\r\n\
<p><a href=\"/\">Back</a></p>\r\n\
</body>\r\n</html>\r\n";

pub const TASKS_BEGIN: &str = "<html>\r\n<head><title>Tasks</title></head>\r\n<body>\r\n\
<h1>Task list</h1>\r\n";

pub const TASKS_END: &str = "<p><a href=\"/\">Back</a></p>\r\n</body>\r\n</html>\r\n";

pub const STATS_BEGIN: &str = "<html>\r\n<head><title>Network stats</title></head>\r\n<body>\r\n\
<h1>Network stats</h1>\r\n\
<p>Statistics output is disabled.</p>\r\n";

pub const STATS_END: &str = "<p><a href=\"/\">Back</a></p>\r\n</body>\r\n</html>\r\n";

pub const TESTFORM_BEGIN: &str = "<html>\r\n<head><title>Test form</title></head>\r\n<body>\r\n\
<h1>Test form</h1>\r\n\
<form action=\"/testform.htm\" method=\"get\">\r\n\
<input type=\"text\" name=\"field1\">\r\n\
<input type=\"text\" name=\"field2\">\r\n\
<input type=\"submit\" value=\"Send\">\r\n\
</form>\r\n\
<h2>Received entries</h2>\r\n";

pub const TESTFORM_END: &str = "<p><a href=\"/\">Back</a></p>\r\n</body>\r\n</html>\r\n";
